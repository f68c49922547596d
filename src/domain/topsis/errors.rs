//! Errors raised by the TOPSIS engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures of a ranking computation. None of them yields a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("At least one alternative is required to compute a ranking")]
    InsufficientData,

    #[error(
        "Criteria of alternative '{alternative_id}' do not match the weights \
         (without weight: [{}], without value: [{}])",
        .unweighted.join(", "),
        .missing.join(", ")
    )]
    CriterionMismatch {
        alternative_id: String,
        /// Criteria present in the data that have no weight.
        unweighted: Vec<String>,
        /// Weighted criteria the alternative has no value for.
        missing: Vec<String>,
    },

    #[error("Alternative id '{id}' appears more than once")]
    DuplicateAlternative { id: String },

    #[error("Alternative '{alternative_id}' has a non-finite value for '{criterion}'")]
    NonFiniteValue {
        alternative_id: String,
        criterion: String,
    },

    #[error("Weight for '{criterion}' must be finite and non-negative, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("Criterion '{criterion}' is zero for every alternative and cannot be normalized")]
    DegenerateColumn { criterion: String },

    #[error(
        "Closeness is undefined: all {alternatives} alternative(s) coincide with both ideal solutions"
    )]
    UndefinedCloseness { alternatives: usize },
}

impl TopsisError {
    /// The error code presented to callers outside the domain.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::InsufficientData => ErrorCode::InsufficientData,
            TopsisError::CriterionMismatch { .. } => ErrorCode::CriterionMismatch,
            TopsisError::DuplicateAlternative { .. }
            | TopsisError::NonFiniteValue { .. }
            | TopsisError::InvalidWeight { .. } => ErrorCode::ValidationFailed,
            TopsisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            TopsisError::UndefinedCloseness { .. } => ErrorCode::UndefinedCloseness,
        }
    }
}

impl From<TopsisError> for DomainError {
    fn from(err: TopsisError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            TopsisError::CriterionMismatch {
                alternative_id,
                unweighted,
                missing,
            } => base
                .with_detail("alternative_id", alternative_id)
                .with_detail("unweighted", unweighted.join(","))
                .with_detail("missing", missing.join(",")),
            TopsisError::DuplicateAlternative { id } => base.with_detail("alternative_id", id),
            TopsisError::NonFiniteValue {
                alternative_id,
                criterion,
            } => base
                .with_detail("alternative_id", alternative_id)
                .with_detail("criterion", criterion),
            TopsisError::InvalidWeight { criterion, .. }
            | TopsisError::DegenerateColumn { criterion } => {
                base.with_detail("criterion", criterion)
            }
            TopsisError::InsufficientData | TopsisError::UndefinedCloseness { .. } => base,
        }
    }
}
