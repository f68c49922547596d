//! TOPSIS Module - Ranking alternatives by similarity to the ideal solution.
//!
//! # Components
//!
//! - `Alternative` - One input row: id, display name, raw criterion values
//! - `WeightMap` - Ordered criterion weights; its order drives every stage
//! - `TopsisEngine` - The scoring pipeline (normalize, weight, ideals, distances, closeness)
//! - `RankedResult` - Closeness and rank per alternative plus all intermediate artifacts
//!
//! # Design Philosophy
//!
//! Computation is pure and synchronous. The engine keeps no state between
//! calls; callers own any caching of results.

mod alternative;
mod engine;
mod errors;
mod ranking;
mod result;
mod weights;

pub use alternative::Alternative;
pub use engine::{DegenerateColumnPolicy, TopsisEngine};
pub use errors::TopsisError;
pub use ranking::average_ranks_descending;
pub use result::{RankedAlternative, RankedResult};
pub use weights::{
    CriterionDirection, CriterionWeight, WeightMap, FUEL_CONSUMPTION, MAX_SPEED, PRICE, SALES,
};
