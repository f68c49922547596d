//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOTOR_TOPSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use motor_topsis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading motorcycles from {}", config.data.path);
//! ```

mod data;
mod error;
mod logging;
mod output;
mod ranking;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use ranking::{RankingConfig, WeightsConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Data source (CSV path and column headers)
    #[serde(default)]
    pub data: DataConfig,

    /// Weights, degenerate column policy, recommendation limit
    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOTOR_TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `MOTOR_TOPSIS__DATA__PATH=./motors.csv` -> `data.path`
    /// - `MOTOR_TOPSIS__RANKING__WEIGHTS__PRICE=0.5` -> `ranking.weights.price`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOTOR_TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()?;
        self.ranking.validate()?;
        Ok(())
    }
}
