//! In-Memory Alternative Source Adapter
//!
//! Serves a fixed set of alternatives. Useful for testing and for callers
//! that already hold the table in memory.

use crate::domain::topsis::Alternative;
use crate::ports::{AlternativeSource, SourceError};

/// In-memory source of alternatives
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeSource {
    alternatives: Vec<Alternative>,
}

impl InMemoryAlternativeSource {
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    /// Get the number of stored alternatives
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl AlternativeSource for InMemoryAlternativeSource {
    /// Returns the stored rows unchanged. Agreement between the rows and the
    /// requested criteria is checked by the engine.
    fn load(&self, _criteria: &[String]) -> Result<Vec<Alternative>, SourceError> {
        Ok(self.alternatives.clone())
    }
}
