//! Alternative - One row of the decision matrix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single alternative (one motorcycle) with its raw criterion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    pub values: BTreeMap<String, f64>,
}

impl Alternative {
    /// Creates an alternative with no criterion values yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Sets the raw value for a criterion, replacing any previous value.
    pub fn with_value(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.values.insert(criterion.into(), value);
        self
    }

    /// Returns the raw value for a criterion.
    pub fn value(&self, criterion: &str) -> Option<f64> {
        self.values.get(criterion).copied()
    }

    /// Returns the criterion keys this alternative carries, in sorted order.
    pub fn criteria(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
