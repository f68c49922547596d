//! Ranked output of the engine, including every intermediate artifact.

use serde::{Deserialize, Serialize};

/// One alternative after scoring.
///
/// `values` and `weighted` are aligned with [`RankedResult::criteria`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub id: String,
    pub name: String,
    pub values: Vec<f64>,
    pub weighted: Vec<f64>,
    /// Euclidean distance to the positive ideal (A+).
    pub distance_to_ideal: f64,
    /// Euclidean distance to the negative ideal (A-).
    pub distance_to_anti_ideal: f64,
    pub closeness: f64,
    /// 1-based, fractional on ties.
    pub rank: f64,
}

impl RankedAlternative {
    /// Raw value at a criterion position.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Weighted normalized value at a criterion position.
    pub fn weighted_at(&self, index: usize) -> Option<f64> {
        self.weighted.get(index).copied()
    }
}

/// Result of one ranking run.
///
/// Alternatives stay in input order; use [`RankedResult::ranked`] for the
/// best-first view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub normalization_factors: Vec<f64>,
    pub ideal_positive: Vec<f64>,
    pub ideal_negative: Vec<f64>,
    pub alternatives: Vec<RankedAlternative>,
}

impl RankedResult {
    /// Position of a criterion in every per-criterion vector.
    pub fn criterion_index(&self, criterion: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c == criterion)
    }

    pub fn normalization_factor(&self, criterion: &str) -> Option<f64> {
        self.criterion_index(criterion)
            .and_then(|i| self.normalization_factors.get(i).copied())
    }

    /// A+ and A- components for one criterion.
    pub fn ideal_values(&self, criterion: &str) -> Option<(f64, f64)> {
        let i = self.criterion_index(criterion)?;
        Some((*self.ideal_positive.get(i)?, *self.ideal_negative.get(i)?))
    }

    pub fn alternative(&self, id: &str) -> Option<&RankedAlternative> {
        self.alternatives.iter().find(|a| a.id == id)
    }

    /// Alternatives ordered by rank; ties keep input order.
    pub fn ranked(&self) -> Vec<&RankedAlternative> {
        let mut rows: Vec<&RankedAlternative> = self.alternatives.iter().collect();
        rows.sort_by(|a, b| a.rank.total_cmp(&b.rank));
        rows
    }

    /// The best-ranked alternative, first in input order on ties.
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.ranked().into_iter().next()
    }

    /// Weighted decision matrix, one row per alternative in input order.
    pub fn weighted_matrix(&self) -> Vec<Vec<f64>> {
        self.alternatives.iter().map(|a| a.weighted.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
