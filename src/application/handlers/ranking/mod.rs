//! Ranking query handlers.
//!
//! Read-only handlers that rank the motorcycle table and project it.

mod compute_ranking;
mod recommend;
mod sort_by_criterion;

pub use compute_ranking::{ComputeRankingHandler, ComputeRankingQuery, ComputeRankingResult};
pub use recommend::{
    RecommendHandler, RecommendQuery, RecommendResult, DEFAULT_RECOMMENDATION_LIMIT,
};
pub use sort_by_criterion::{SortByCriterionHandler, SortByCriterionQuery, SortByCriterionResult};
