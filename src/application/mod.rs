//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read: the source is loaded, ranked and projected.

pub mod handlers;

pub use handlers::{
    ComputeRankingHandler, ComputeRankingQuery, ComputeRankingResult, RecommendHandler,
    RecommendQuery, RecommendResult, SortByCriterionHandler, SortByCriterionQuery,
    SortByCriterionResult, DEFAULT_RECOMMENDATION_LIMIT,
};
