//! Category Sort - Order the ranked table by one criterion's raw value.

use serde::{Deserialize, Serialize};

use super::ProjectionError;
use crate::domain::topsis::RankedResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One row of a category-sorted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedRow {
    pub id: String,
    pub name: String,
    pub closeness: f64,
    pub rank: f64,
    /// Raw value of the sort criterion.
    pub value: f64,
}

pub struct CategorySort;

impl CategorySort {
    /// Orders every alternative by the raw value of `criterion`.
    ///
    /// Closeness and rank are carried along unchanged. Equal values keep
    /// input order.
    pub fn sort(
        result: &RankedResult,
        criterion: &str,
        direction: SortDirection,
    ) -> Result<Vec<SortedRow>, ProjectionError> {
        let index = result
            .criterion_index(criterion)
            .ok_or_else(|| ProjectionError::UnknownCriterion {
                criterion: criterion.to_string(),
            })?;

        let mut rows: Vec<SortedRow> = result
            .alternatives
            .iter()
            .filter_map(|alt| {
                alt.value_at(index).map(|value| SortedRow {
                    id: alt.id.clone(),
                    name: alt.name.clone(),
                    closeness: alt.closeness,
                    rank: alt.rank,
                    value,
                })
            })
            .collect();

        match direction {
            SortDirection::Ascending => rows.sort_by(|a, b| a.value.total_cmp(&b.value)),
            SortDirection::Descending => rows.sort_by(|a, b| b.value.total_cmp(&a.value)),
        }

        Ok(rows)
    }
}
