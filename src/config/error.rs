//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Weight for '{0}' must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("At least one criterion weight must be positive")]
    NoPositiveWeight,

    #[error("Recommendation limit must be greater than zero")]
    InvalidRecommendationLimit,
}
