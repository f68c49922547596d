//! SortByCriterionHandler - Query handler for ordering by one criterion.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::projection::{CategorySort, SortDirection, SortedRow};
use crate::domain::topsis::WeightMap;

use super::compute_ranking::{ComputeRankingHandler, ComputeRankingQuery};

/// Query to list every ranked alternative ordered by a raw criterion value.
#[derive(Debug, Clone)]
pub struct SortByCriterionQuery {
    pub weights: WeightMap,
    pub criterion: String,
    pub direction: SortDirection,
}

/// Result of a successful sort query.
pub type SortByCriterionResult = Vec<SortedRow>;

pub struct SortByCriterionHandler {
    ranking: Arc<ComputeRankingHandler>,
}

impl SortByCriterionHandler {
    pub fn new(ranking: Arc<ComputeRankingHandler>) -> Self {
        Self { ranking }
    }

    pub fn handle(&self, query: SortByCriterionQuery) -> Result<SortByCriterionResult, DomainError> {
        let ranked = self.ranking.handle(ComputeRankingQuery {
            weights: query.weights,
        })?;
        Ok(CategorySort::sort(&ranked, &query.criterion, query.direction)?)
    }
}
