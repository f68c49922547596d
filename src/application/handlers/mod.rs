//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    ComputeRankingHandler, ComputeRankingQuery, ComputeRankingResult, RecommendHandler,
    RecommendQuery, RecommendResult, SortByCriterionHandler, SortByCriterionQuery,
    SortByCriterionResult, DEFAULT_RECOMMENDATION_LIMIT,
};
