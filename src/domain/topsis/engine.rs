//! TOPSIS Engine - Normalization, weighting, ideal extraction, distances and closeness.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::ranking::average_ranks_descending;
use super::{
    Alternative, CriterionDirection, RankedAlternative, RankedResult, TopsisError, WeightMap,
};

/// What to do with a criterion whose values are all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateColumnPolicy {
    /// Fail with [`TopsisError::DegenerateColumn`].
    #[default]
    Reject,
    /// The column contributes zero to every weighted value.
    ZeroContribution,
}

/// Stateless TOPSIS scorer.
///
/// Holds only immutable settings; every call to
/// [`compute_ranking`](TopsisEngine::compute_ranking) recomputes all
/// artifacts from its inputs.
#[derive(Debug, Clone, Default)]
pub struct TopsisEngine {
    degenerate_policy: DegenerateColumnPolicy,
    directions: HashMap<String, CriterionDirection>,
}

impl TopsisEngine {
    /// Creates an engine that rejects degenerate columns and treats every
    /// criterion as a benefit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degenerate_policy(mut self, policy: DegenerateColumnPolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Overrides the direction of one criterion. Unlisted criteria are benefits.
    pub fn with_direction(
        mut self,
        criterion: impl Into<String>,
        direction: CriterionDirection,
    ) -> Self {
        self.directions.insert(criterion.into(), direction);
        self
    }

    pub fn degenerate_policy(&self) -> DegenerateColumnPolicy {
        self.degenerate_policy
    }

    pub fn direction(&self, criterion: &str) -> CriterionDirection {
        self.directions.get(criterion).copied().unwrap_or_default()
    }

    /// Ranks alternatives by relative closeness to the ideal solution.
    ///
    /// # Algorithm
    /// 1. r_ij = x_ij / sqrt(Σ_i x_ij²)
    /// 2. v_ij = r_ij × w_j
    /// 3. A+_j = max_i v_ij, A-_j = min_i v_ij (swapped for cost criteria)
    /// 4. d+_i = ‖v_i − A+‖, d-_i = ‖v_i − A-‖
    /// 5. C_i = d-_i / (d+_i + d-_i)
    /// 6. rank by C_i descending, ties averaged
    ///
    /// # Errors
    /// - Empty input: `InsufficientData`
    /// - Weights and data keys disagree: `CriterionMismatch`
    /// - Repeated id: `DuplicateAlternative`
    /// - NaN or infinite raw value: `NonFiniteValue`
    /// - Negative or non-finite weight: `InvalidWeight`
    /// - All-zero column under `Reject`: `DegenerateColumn`
    /// - d+ + d- = 0: `UndefinedCloseness`
    pub fn compute_ranking(
        &self,
        alternatives: &[Alternative],
        weights: &WeightMap,
    ) -> Result<RankedResult, TopsisError> {
        if alternatives.is_empty() {
            return Err(TopsisError::InsufficientData);
        }
        weights.validate()?;

        let criteria = weights.criteria();
        let weight_vector: Vec<f64> = weights.iter().map(|w| w.weight).collect();
        let matrix = Self::decision_matrix(alternatives, &criteria)?;

        debug!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            "Computing TOPSIS ranking"
        );

        let normalization_factors = self.normalization_factors(&matrix, &criteria)?;

        let weighted: Vec<Vec<f64>> = matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&normalization_factors)
                    .zip(&weight_vector)
                    .map(|((&x, &norm), &w)| if norm == 0.0 { 0.0 } else { x / norm * w })
                    .collect()
            })
            .collect();

        let (ideal_positive, ideal_negative) = self.ideal_solutions(&weighted, &criteria);

        let distances: Vec<(f64, f64)> = weighted
            .iter()
            .map(|row| {
                (
                    euclidean_distance(row, &ideal_positive),
                    euclidean_distance(row, &ideal_negative),
                )
            })
            .collect();

        if distances.iter().any(|(pos, neg)| pos + neg == 0.0) {
            return Err(TopsisError::UndefinedCloseness {
                alternatives: alternatives.len(),
            });
        }

        let closeness: Vec<f64> = distances.iter().map(|(pos, neg)| neg / (pos + neg)).collect();
        let ranks = average_ranks_descending(&closeness);

        let ranked: Vec<RankedAlternative> = alternatives
            .iter()
            .zip(matrix)
            .zip(weighted)
            .zip(distances)
            .zip(closeness.iter().zip(&ranks))
            .map(
                |((((alt, values), weighted), (d_pos, d_neg)), (&closeness, &rank))| {
                    RankedAlternative {
                        id: alt.id.clone(),
                        name: alt.name.clone(),
                        values,
                        weighted,
                        distance_to_ideal: d_pos,
                        distance_to_anti_ideal: d_neg,
                        closeness,
                        rank,
                    }
                },
            )
            .collect();

        let result = RankedResult {
            criteria,
            weights: weight_vector,
            normalization_factors,
            ideal_positive,
            ideal_negative,
            alternatives: ranked,
        };

        if let Some(top) = result.top() {
            debug!(
                top_id = %top.id,
                closeness = top.closeness,
                "TOPSIS ranking computed"
            );
        }

        Ok(result)
    }

    /// Extracts raw values in criterion order, validating every row.
    fn decision_matrix(
        alternatives: &[Alternative],
        criteria: &[String],
    ) -> Result<Vec<Vec<f64>>, TopsisError> {
        let mut seen = HashSet::new();
        let mut matrix = Vec::with_capacity(alternatives.len());

        for alt in alternatives {
            if !seen.insert(alt.id.as_str()) {
                return Err(TopsisError::DuplicateAlternative { id: alt.id.clone() });
            }

            let unweighted: Vec<String> = alt
                .criteria()
                .filter(|c| !criteria.iter().any(|k| k == c))
                .map(str::to_string)
                .collect();
            let missing: Vec<String> = criteria
                .iter()
                .filter(|c| alt.value(c).is_none())
                .cloned()
                .collect();
            if !unweighted.is_empty() || !missing.is_empty() {
                return Err(TopsisError::CriterionMismatch {
                    alternative_id: alt.id.clone(),
                    unweighted,
                    missing,
                });
            }

            let mut row = Vec::with_capacity(criteria.len());
            for criterion in criteria {
                match alt.value(criterion) {
                    Some(v) if v.is_finite() => row.push(v),
                    _ => {
                        return Err(TopsisError::NonFiniteValue {
                            alternative_id: alt.id.clone(),
                            criterion: criterion.clone(),
                        })
                    }
                }
            }
            matrix.push(row);
        }

        Ok(matrix)
    }

    /// Column L2 norms. A zero norm is resolved by the degenerate policy.
    fn normalization_factors(
        &self,
        matrix: &[Vec<f64>],
        criteria: &[String],
    ) -> Result<Vec<f64>, TopsisError> {
        criteria
            .iter()
            .enumerate()
            .map(|(j, criterion)| {
                let norm = matrix
                    .iter()
                    .map(|row| row[j] * row[j])
                    .sum::<f64>()
                    .sqrt();

                if norm != 0.0 {
                    return Ok(norm);
                }
                match self.degenerate_policy {
                    DegenerateColumnPolicy::Reject => Err(TopsisError::DegenerateColumn {
                        criterion: criterion.clone(),
                    }),
                    DegenerateColumnPolicy::ZeroContribution => {
                        warn!(criterion = %criterion, "All-zero criterion contributes nothing");
                        Ok(0.0)
                    }
                }
            })
            .collect()
    }

    /// Column-wise best (A+) and worst (A-) weighted values.
    fn ideal_solutions(&self, weighted: &[Vec<f64>], criteria: &[String]) -> (Vec<f64>, Vec<f64>) {
        criteria
            .iter()
            .enumerate()
            .map(|(j, criterion)| {
                let max = weighted
                    .iter()
                    .map(|row| row[j])
                    .fold(f64::NEG_INFINITY, f64::max);
                let min = weighted
                    .iter()
                    .map(|row| row[j])
                    .fold(f64::INFINITY, f64::min);

                match self.direction(criterion) {
                    CriterionDirection::Benefit => (max, min),
                    CriterionDirection::Cost => (min, max),
                }
            })
            .unzip()
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
