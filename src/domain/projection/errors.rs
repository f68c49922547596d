//! Errors raised by read-only projections over a ranked table.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("No alternative matches the selected ranges")]
    EmptyFilterResult,

    #[error("The ranked table has no alternatives")]
    NoAlternatives,

    #[error("Unknown criterion '{criterion}'")]
    UnknownCriterion { criterion: String },

    #[error("Invalid range for '{criterion}': [{min}, {max}]")]
    InvalidRange { criterion: String, min: f64, max: f64 },
}

impl ProjectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectionError::EmptyFilterResult | ProjectionError::NoAlternatives => {
                ErrorCode::EmptyFilterResult
            }
            ProjectionError::UnknownCriterion { .. } => ErrorCode::UnknownCriterion,
            ProjectionError::InvalidRange { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<ProjectionError> for DomainError {
    fn from(err: ProjectionError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            ProjectionError::UnknownCriterion { criterion }
            | ProjectionError::InvalidRange { criterion, .. } => {
                base.with_detail("criterion", criterion)
            }
            ProjectionError::EmptyFilterResult | ProjectionError::NoAlternatives => base,
        }
    }
}
