//! Alternative Source Port - Interface for loading the decision table.
//!
//! The engine never reads storage itself; a source hands it fully parsed
//! alternatives.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::Alternative;

/// Errors that can occur while loading alternatives
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Data file not found: {0}")]
    NotFound(String),

    #[error("Required column '{column}' is missing")]
    MissingColumn { column: String },

    #[error("No column for weighted criterion '{criterion}'")]
    MissingCriterion { criterion: String },

    #[error("Row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Malformed data: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        let code = match err {
            SourceError::MissingCriterion { .. } => ErrorCode::CriterionMismatch,
            SourceError::MissingColumn { .. } | SourceError::InvalidValue { .. } => {
                ErrorCode::ValidationFailed
            }
            SourceError::NotFound(_) | SourceError::Malformed(_) | SourceError::IoError(_) => {
                ErrorCode::SourceUnavailable
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for loading the alternatives to rank
pub trait AlternativeSource: Send + Sync {
    /// Load every alternative with a value for each named criterion
    ///
    /// # Arguments
    /// * `criteria` - Criterion keys to read, in the order they are weighted
    ///
    /// # Errors
    /// Returns `SourceError` if the data cannot be read or a value is invalid
    fn load(&self, criteria: &[String]) -> Result<Vec<Alternative>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_criterion_maps_to_criterion_mismatch() {
        let err: DomainError = SourceError::MissingCriterion {
            criterion: "max_speed".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CriterionMismatch);
        assert!(err.message.contains("max_speed"));
    }

    #[test]
    fn missing_id_column_maps_to_validation_failed() {
        let err: DomainError = SourceError::MissingColumn {
            column: "id".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn unreadable_source_maps_to_source_unavailable() {
        let err: DomainError = SourceError::NotFound("motors.csv".to_string()).into();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
    }
}
