//! Projection Module - Read-only views over an already ranked table.
//!
//! Projections consume a [`RankedResult`](crate::domain::topsis::RankedResult)
//! and never re-run the engine.
//!
//! # Components
//!
//! - `RangeFilter` - Inclusive per-criterion ranges, recommendation percentages
//! - `CategorySort` - Ordering by one criterion's raw value
//! - `CriterionBounds` - Observed min/max/step used to seed range selection

mod bounds;
mod category_sort;
mod errors;
mod range_filter;

pub use bounds::{CriterionBounds, RANGE_STEPS};
pub use category_sort::{CategorySort, SortDirection, SortedRow};
pub use errors::ProjectionError;
pub use range_filter::{
    recommendation_percentage, CriterionRange, RangeFilter, Recommendation, Recommendations,
};
