//! RecommendHandler - Query handler for range-filtered recommendations.
//!
//! Ranks the full table, keeps the alternatives inside every requested range
//! and scores them by their position within that subset.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::projection::{CriterionRange, RangeFilter, Recommendation, Recommendations};
use crate::domain::topsis::WeightMap;

use super::compute_ranking::{ComputeRankingHandler, ComputeRankingQuery};

/// Default number of recommendations returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 15;

/// Query for recommendations within value ranges.
#[derive(Debug, Clone)]
pub struct RecommendQuery {
    pub weights: WeightMap,
    /// Inclusive bounds on raw criterion values. Empty keeps everything.
    pub ranges: Vec<CriterionRange>,
    /// Maximum number of recommendations returned (must be at least 1).
    pub limit: usize,
}

/// Result of a successful recommendation query.
#[derive(Debug, Clone)]
pub struct RecommendResult {
    /// Best match within the ranges.
    pub top: Recommendation,
    /// Matches ordered by percentage, truncated to the query limit.
    pub recommendations: Recommendations,
    /// Number of alternatives that matched before truncation.
    pub matched: usize,
}

/// Handler for range-filtered recommendations.
pub struct RecommendHandler {
    ranking: Arc<ComputeRankingHandler>,
}

impl RecommendHandler {
    pub fn new(ranking: Arc<ComputeRankingHandler>) -> Self {
        Self { ranking }
    }

    pub fn handle(&self, query: RecommendQuery) -> Result<RecommendResult, DomainError> {
        if query.limit == 0 {
            return Err(DomainError::validation(
                "limit",
                "Recommendation limit must be at least 1",
            ));
        }

        let ranked = self.ranking.handle(ComputeRankingQuery {
            weights: query.weights,
        })?;

        let recommendations = RangeFilter::from_ranges(query.ranges).apply(&ranked)?;
        let matched = recommendations.len();
        let recommendations = recommendations.truncated(query.limit);
        let top = recommendations.top_recommendation()?.clone();

        info!(
            matched,
            returned = recommendations.len(),
            top_id = %top.id,
            "Recommendations computed"
        );

        Ok(RecommendResult {
            top,
            recommendations,
            matched,
        })
    }
}
