//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - Alternative source backed by a CSV file
//! - `memory` - In-memory alternative source
//! - `report` - JSON/YAML rendering of ranking output

pub mod csv;
pub mod memory;
pub mod report;

pub use self::csv::CsvAlternativeSource;
pub use memory::InMemoryAlternativeSource;
pub use report::{RankingReport, ReportError, ReportFormat, ReportWriter};
