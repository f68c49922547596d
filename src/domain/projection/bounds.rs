//! Criterion bounds used to seed range selection.

use serde::{Deserialize, Serialize};

use super::{CriterionRange, ProjectionError};
use crate::domain::topsis::RankedResult;

/// Number of slider steps between a criterion's minimum and maximum.
pub const RANGE_STEPS: f64 = 100.0;

/// Observed range of one criterion's raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionBounds {
    pub criterion: String,
    pub min: f64,
    pub max: f64,
    /// (max - min) / 100
    pub step: f64,
}

impl CriterionBounds {
    pub fn of(result: &RankedResult, criterion: &str) -> Result<Self, ProjectionError> {
        let index = result
            .criterion_index(criterion)
            .ok_or_else(|| ProjectionError::UnknownCriterion {
                criterion: criterion.to_string(),
            })?;

        let values: Vec<f64> = result
            .alternatives
            .iter()
            .filter_map(|a| a.value_at(index))
            .collect();
        if values.is_empty() {
            return Err(ProjectionError::NoAlternatives);
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            criterion: criterion.to_string(),
            min,
            max,
            step: (max - min) / RANGE_STEPS,
        })
    }

    /// Bounds for every criterion, in criterion order.
    pub fn all(result: &RankedResult) -> Result<Vec<Self>, ProjectionError> {
        result
            .criteria
            .iter()
            .map(|c| Self::of(result, c))
            .collect()
    }

    /// The full range, which selects every alternative.
    pub fn as_range(&self) -> CriterionRange {
        CriterionRange::new(self.criterion.clone(), self.min, self.max)
    }
}
