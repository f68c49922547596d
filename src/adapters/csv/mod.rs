//! CSV Adapters
//!
//! - **CsvAlternativeSource** - Loads alternatives from a headered CSV file

mod csv_alternative_source;

pub use csv_alternative_source::CsvAlternativeSource;
