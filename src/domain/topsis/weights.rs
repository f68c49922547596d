//! Criterion weights and directions.

use serde::{Deserialize, Serialize};

use super::TopsisError;

/// Criterion key for the purchase price.
pub const PRICE: &str = "price";

/// Criterion key for the top speed.
pub const MAX_SPEED: &str = "max_speed";

/// Criterion key for fuel consumption.
pub const FUEL_CONSUMPTION: &str = "fuel_consumption";

/// Criterion key for unit sales.
pub const SALES: &str = "sales";

/// Whether larger or smaller raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Higher is better.
    #[default]
    Benefit,
    /// Lower is better.
    Cost,
}

/// A single criterion and its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// Ordered mapping of criterion name to weight.
///
/// Declaration order is the criterion order used by every stage of the
/// engine and by every artifact in its output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap {
    entries: Vec<CriterionWeight>,
}

impl WeightMap {
    /// Creates an empty weight map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a weight, keeping the original position if the criterion exists.
    pub fn with_weight(mut self, criterion: impl Into<String>, weight: f64) -> Self {
        self.insert(criterion, weight);
        self
    }

    /// Inserts or replaces a weight.
    pub fn insert(&mut self, criterion: impl Into<String>, weight: f64) {
        let criterion = criterion.into();
        match self.entries.iter_mut().find(|e| e.criterion == criterion) {
            Some(entry) => entry.weight = weight,
            None => self.entries.push(CriterionWeight { criterion, weight }),
        }
    }

    /// Returns the weight for a criterion.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.criterion == criterion)
            .map(|e| e.weight)
    }

    /// Returns true if the criterion has a weight.
    pub fn contains(&self, criterion: &str) -> bool {
        self.get(criterion).is_some()
    }

    /// Criterion names in declaration order.
    pub fn criteria(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.criterion.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights. Weights are not required to sum to 1.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), TopsisError> {
        match self
            .entries
            .iter()
            .find(|e| !e.weight.is_finite() || e.weight < 0.0)
        {
            Some(bad) => Err(TopsisError::InvalidWeight {
                criterion: bad.criterion.clone(),
                weight: bad.weight,
            }),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = WeightMap::new();
        for (criterion, weight) in iter {
            map.insert(criterion, weight);
        }
        map
    }
}
