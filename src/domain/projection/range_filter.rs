//! Range Filter - Criterion range selection and recommendation percentages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ProjectionError;
use crate::domain::foundation::Percentage;
use crate::domain::topsis::{average_ranks_descending, RankedAlternative, RankedResult};

/// Inclusive bounds on one criterion's raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRange {
    pub criterion: String,
    pub min: f64,
    pub max: f64,
}

impl CriterionRange {
    pub fn new(criterion: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            criterion: criterion.into(),
            min,
            max,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self) -> Result<(), ProjectionError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ProjectionError::InvalidRange {
                criterion: self.criterion.clone(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One alternative that survived the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub percentage: Percentage,
    /// Rank within the filtered subset.
    pub subset_rank: f64,
    /// Rank within the full dataset.
    pub rank: f64,
    pub closeness: f64,
    /// Raw values aligned with [`Recommendations::criteria`].
    pub values: Vec<f64>,
}

/// Filtered alternatives, best recommendation first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub criteria: Vec<String>,
    pub items: Vec<Recommendation>,
}

impl Recommendations {
    /// The alternative with the highest recommendation percentage.
    ///
    /// Fails explicitly when the filter matched nothing.
    pub fn top_recommendation(&self) -> Result<&Recommendation, ProjectionError> {
        self.items.first().ok_or(ProjectionError::EmptyFilterResult)
    }

    /// Keeps at most `limit` items. Percentages are not recomputed.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }

    /// Raw value of one item for a named criterion.
    pub fn value_of(&self, item: &Recommendation, criterion: &str) -> Option<f64> {
        let index = self.criteria.iter().position(|c| c == criterion)?;
        item.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Selects alternatives whose raw values fall inside every given range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    ranges: Vec<CriterionRange>,
}

impl RangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, criterion: impl Into<String>, min: f64, max: f64) -> Self {
        self.ranges.push(CriterionRange::new(criterion, min, max));
        self
    }

    pub fn from_ranges(ranges: Vec<CriterionRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[CriterionRange] {
        &self.ranges
    }

    /// Filters the ranked table and scores the survivors.
    ///
    /// # Algorithm
    /// For the n matching alternatives, closeness is re-ranked within the
    /// subset (ties averaged) and
    /// percentage = (1 - (subset_rank - 1) / n) × 100
    ///
    /// # Edge Cases
    /// - No ranges: every alternative matches
    /// - Nothing matches: empty `Recommendations`; `top_recommendation` fails
    pub fn apply(&self, result: &RankedResult) -> Result<Recommendations, ProjectionError> {
        let mut resolved = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            range.validate()?;
            let index = result.criterion_index(&range.criterion).ok_or_else(|| {
                ProjectionError::UnknownCriterion {
                    criterion: range.criterion.clone(),
                }
            })?;
            resolved.push((index, range));
        }

        let matching: Vec<&RankedAlternative> = result
            .alternatives
            .iter()
            .filter(|alt| {
                resolved.iter().all(|(index, range)| {
                    alt.value_at(*index).is_some_and(|v| range.contains(v))
                })
            })
            .collect();

        let count = matching.len();
        let closeness: Vec<f64> = matching.iter().map(|a| a.closeness).collect();
        let subset_ranks = average_ranks_descending(&closeness);

        let mut items: Vec<Recommendation> = matching
            .iter()
            .zip(subset_ranks)
            .map(|(alt, subset_rank)| Recommendation {
                id: alt.id.clone(),
                name: alt.name.clone(),
                percentage: recommendation_percentage(subset_rank, count),
                subset_rank,
                rank: alt.rank,
                closeness: alt.closeness,
                values: alt.values.clone(),
            })
            .collect();
        items.sort_by(|a, b| b.percentage.value().total_cmp(&a.percentage.value()));

        debug!(
            ranges = self.ranges.len(),
            total = result.len(),
            matched = count,
            "Applied range filter"
        );

        Ok(Recommendations {
            criteria: result.criteria.clone(),
            items,
        })
    }
}

/// (1 - (rank - 1) / count) × 100, evaluated as 100 × (count - rank + 1) / count
/// so that whole ranks give exact percentages.
pub fn recommendation_percentage(rank: f64, count: usize) -> Percentage {
    if count == 0 {
        return Percentage::ZERO;
    }
    let n = count as f64;
    Percentage::new(100.0 * (n - rank + 1.0) / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, price: f64, speed: f64, closeness: f64, rank: f64) -> RankedAlternative {
        RankedAlternative {
            id: id.to_string(),
            name: format!("Motor {}", id),
            values: vec![price, speed],
            weighted: vec![0.0, 0.0],
            distance_to_ideal: 1.0 - closeness,
            distance_to_anti_ideal: closeness,
            closeness,
            rank,
        }
    }

    fn ranked_table() -> RankedResult {
        RankedResult {
            criteria: vec!["price".into(), "max_speed".into()],
            weights: vec![0.6, 0.4],
            normalization_factors: vec![1.0, 1.0],
            ideal_positive: vec![0.0, 0.0],
            ideal_negative: vec![0.0, 0.0],
            alternatives: vec![
                row("1", 18.0, 100.0, 0.55, 4.0),
                row("2", 25.0, 130.0, 0.90, 1.0),
                row("3", 16.0, 95.0, 0.30, 6.0),
                row("4", 22.0, 120.0, 0.80, 2.0),
                row("5", 30.0, 160.0, 0.60, 3.0),
                row("6", 17.0, 105.0, 0.50, 5.0),
                row("7", 40.0, 180.0, 0.20, 7.0),
            ],
        }
    }

    fn percentages(recs: &Recommendations) -> Vec<f64> {
        recs.items.iter().map(|r| r.percentage.value()).collect()
    }

    #[test]
    fn five_survivors_get_descending_twenty_point_steps() {
        let recs = RangeFilter::new()
            .with_range("price", 16.0, 25.0)
            .apply(&ranked_table())
            .unwrap();

        assert_eq!(recs.len(), 5);
        assert_eq!(percentages(&recs), vec![100.0, 80.0, 60.0, 40.0, 20.0]);
        let ids: Vec<_> = recs.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "6", "3"]);
    }

    #[test]
    fn carries_full_dataset_rank_alongside_subset_rank() {
        let recs = RangeFilter::new()
            .with_range("max_speed", 100.0, 160.0)
            .apply(&ranked_table())
            .unwrap();

        let top = recs.top_recommendation().unwrap();
        assert_eq!(top.id, "2");
        assert_eq!(top.subset_rank, 1.0);

        let five = recs.items.iter().find(|r| r.id == "5").unwrap();
        assert_eq!(five.rank, 3.0);
        assert_eq!(five.subset_rank, 3.0);
        assert_eq!(recs.value_of(five, "price"), Some(30.0));
    }

    #[test]
    fn ranges_are_inclusive_and_combined() {
        let recs = RangeFilter::new()
            .with_range("price", 18.0, 30.0)
            .with_range("max_speed", 100.0, 130.0)
            .apply(&ranked_table())
            .unwrap();

        let mut ids: Vec<_> = recs.items.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn no_ranges_keeps_everything() {
        let recs = RangeFilter::new().apply(&ranked_table()).unwrap();
        assert_eq!(recs.len(), 7);
        assert_eq!(recs.top_recommendation().unwrap().percentage.value(), 100.0);
    }

    #[test]
    fn empty_result_fails_top_recommendation() {
        let recs = RangeFilter::new()
            .with_range("price", 1000.0, 2000.0)
            .apply(&ranked_table())
            .unwrap();

        assert!(recs.is_empty());
        assert_eq!(
            recs.top_recommendation().unwrap_err(),
            ProjectionError::EmptyFilterResult
        );
    }

    #[test]
    fn tied_survivors_share_percentage() {
        let mut table = ranked_table();
        table.alternatives[0].closeness = 0.90;

        let recs = RangeFilter::new()
            .with_range("price", 18.0, 25.0)
            .apply(&table)
            .unwrap();

        // ids 1 and 2 tie for first of three: rank 1.5 each
        let first = &recs.items[0];
        let second = &recs.items[1];
        assert_eq!(first.subset_rank, 1.5);
        assert_eq!(second.subset_rank, 1.5);
        assert!((first.percentage.value() - 100.0 * (1.0 - 0.5 / 3.0)).abs() < 1e-9);
        assert_eq!(first.id, "1");
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let err = RangeFilter::new()
            .with_range("color", 0.0, 1.0)
            .apply(&ranked_table())
            .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::UnknownCriterion {
                criterion: "color".into()
            }
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = RangeFilter::new()
            .with_range("price", 30.0, 10.0)
            .apply(&ranked_table())
            .unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidRange { .. }));
    }

    #[test]
    fn truncated_keeps_best_items() {
        let recs = RangeFilter::new().apply(&ranked_table()).unwrap().truncated(2);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs.items[1].id, "4");
    }

    #[test]
    fn percentage_formula() {
        assert_eq!(recommendation_percentage(1.0, 4).value(), 100.0);
        assert_eq!(recommendation_percentage(3.0, 4).value(), 50.0);
        assert_eq!(recommendation_percentage(1.0, 0), Percentage::ZERO);
    }
}
