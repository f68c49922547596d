//! ComputeRankingHandler - Query handler for ranking every alternative.
//!
//! Loads the decision table through the source port and runs TOPSIS on it.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::topsis::{RankedResult, TopsisEngine, WeightMap};
use crate::ports::AlternativeSource;

/// Query to rank all alternatives under a weight map.
#[derive(Debug, Clone)]
pub struct ComputeRankingQuery {
    /// Criteria and their weights, in evaluation order.
    pub weights: WeightMap,
}

/// Result of a successful ranking query.
pub type ComputeRankingResult = RankedResult;

/// Handler for ranking alternatives.
///
/// Holds no state between calls; every query re-reads the source.
pub struct ComputeRankingHandler {
    source: Arc<dyn AlternativeSource>,
    engine: TopsisEngine,
}

impl ComputeRankingHandler {
    pub fn new(source: Arc<dyn AlternativeSource>, engine: TopsisEngine) -> Self {
        Self { source, engine }
    }

    pub fn handle(&self, query: ComputeRankingQuery) -> Result<ComputeRankingResult, DomainError> {
        let criteria = query.weights.criteria();
        let alternatives = self.source.load(&criteria)?;
        let result = self.engine.compute_ranking(&alternatives, &query.weights)?;

        if let Some(top) = result.top() {
            info!(
                alternatives = result.len(),
                criteria = criteria.len(),
                top_id = %top.id,
                top_closeness = top.closeness,
                "Ranking computed"
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAlternativeSource;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::topsis::{Alternative, DegenerateColumnPolicy};
    use crate::ports::SourceError;

    // ─────────────────────────────────────────────────────────────────────
    // Test Helpers
    // ─────────────────────────────────────────────────────────────────────

    struct FailingSource;

    impl AlternativeSource for FailingSource {
        fn load(&self, _criteria: &[String]) -> Result<Vec<Alternative>, SourceError> {
            Err(SourceError::NotFound("motors.csv".to_string()))
        }
    }

    fn motor(id: &str, price: f64, speed: f64) -> Alternative {
        Alternative::new(id, format!("Motor {}", id))
            .with_value("price", price)
            .with_value("max_speed", speed)
    }

    fn handler_with(alternatives: Vec<Alternative>) -> ComputeRankingHandler {
        ComputeRankingHandler::new(
            Arc::new(InMemoryAlternativeSource::new(alternatives)),
            TopsisEngine::new(),
        )
    }

    fn query() -> ComputeRankingQuery {
        ComputeRankingQuery {
            weights: WeightMap::new()
                .with_weight("price", 0.6)
                .with_weight("max_speed", 0.4),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn ranks_loaded_alternatives() {
        let handler = handler_with(vec![
            motor("1", 10.0, 100.0),
            motor("2", 30.0, 140.0),
            motor("3", 20.0, 120.0),
        ]);

        let result = handler.handle(query()).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.criteria, vec!["price", "max_speed"]);
        assert_eq!(result.top().unwrap().id, "2");
        assert_eq!(result.alternative("1").unwrap().rank, 3.0);
    }

    #[test]
    fn empty_source_is_insufficient_data() {
        let handler = handler_with(vec![]);

        let err = handler.handle(query()).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientData);
    }

    #[test]
    fn source_failure_is_source_unavailable() {
        let handler = ComputeRankingHandler::new(Arc::new(FailingSource), TopsisEngine::new());

        let err = handler.handle(query()).unwrap_err();

        assert_eq!(err.code, ErrorCode::SourceUnavailable);
    }

    #[test]
    fn missing_criterion_is_criterion_mismatch() {
        let handler = handler_with(vec![Alternative::new("1", "Only price").with_value("price", 10.0)]);

        let err = handler.handle(query()).unwrap_err();

        assert_eq!(err.code, ErrorCode::CriterionMismatch);
        assert_eq!(err.details.get("alternative_id").map(String::as_str), Some("1"));
    }

    #[test]
    fn unweighted_criterion_is_criterion_mismatch() {
        let handler = handler_with(vec![
            motor("1", 10.0, 100.0).with_value("sales", 4000.0),
            motor("2", 20.0, 120.0).with_value("sales", 3000.0),
        ]);

        let err = handler.handle(query()).unwrap_err();

        assert_eq!(err.code, ErrorCode::CriterionMismatch);
    }

    #[test]
    fn zero_column_follows_engine_policy() {
        let alternatives = vec![motor("1", 10.0, 0.0), motor("2", 20.0, 0.0)];

        let rejecting = handler_with(alternatives.clone());
        let err = rejecting.handle(query()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateColumn);

        let tolerant = ComputeRankingHandler::new(
            Arc::new(InMemoryAlternativeSource::new(alternatives)),
            TopsisEngine::new().with_degenerate_policy(DegenerateColumnPolicy::ZeroContribution),
        );
        let result = tolerant.handle(query()).unwrap();
        assert_eq!(result.top().unwrap().id, "2");
    }

    #[test]
    fn single_alternative_is_undefined_closeness() {
        let handler = handler_with(vec![motor("1", 10.0, 100.0)]);

        let err = handler.handle(query()).unwrap_err();

        assert_eq!(err.code, ErrorCode::UndefinedCloseness);
    }
}
