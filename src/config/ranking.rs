//! Ranking configuration

use serde::Deserialize;

use crate::domain::topsis::{
    DegenerateColumnPolicy, TopsisEngine, WeightMap, FUEL_CONSUMPTION, MAX_SPEED, PRICE, SALES,
};

use super::error::ValidationError;

/// Ranking engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Criterion weights
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Handling of all-zero criterion columns
    #[serde(default)]
    pub degenerate_policy: DegenerateColumnPolicy,

    /// Maximum number of recommendations returned after filtering
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
}

/// Weight per motorcycle criterion
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_price")]
    pub price: f64,

    #[serde(default = "default_max_speed")]
    pub max_speed: f64,

    #[serde(default = "default_fuel_consumption")]
    pub fuel_consumption: f64,

    #[serde(default = "default_sales")]
    pub sales: f64,
}

impl RankingConfig {
    /// Build an engine carrying the configured policy
    pub fn engine(&self) -> TopsisEngine {
        TopsisEngine::new().with_degenerate_policy(self.degenerate_policy)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        if self.recommendation_limit == 0 {
            return Err(ValidationError::InvalidRecommendationLimit);
        }
        Ok(())
    }
}

impl WeightsConfig {
    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (PRICE, self.price),
            (MAX_SPEED, self.max_speed),
            (FUEL_CONSUMPTION, self.fuel_consumption),
            (SALES, self.sales),
        ]
    }

    /// Weights in the fixed criterion order
    pub fn to_weight_map(&self) -> WeightMap {
        self.entries().into_iter().collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let entries = self.entries();
        if let Some((criterion, _)) = entries
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(ValidationError::InvalidWeight(*criterion));
        }
        if !entries.iter().any(|(_, weight)| *weight > 0.0) {
            return Err(ValidationError::NoPositiveWeight);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            degenerate_policy: DegenerateColumnPolicy::default(),
            recommendation_limit: default_recommendation_limit(),
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            price: default_price(),
            max_speed: default_max_speed(),
            fuel_consumption: default_fuel_consumption(),
            sales: default_sales(),
        }
    }
}

fn default_price() -> f64 {
    0.4
}

fn default_max_speed() -> f64 {
    0.3
}

fn default_fuel_consumption() -> f64 {
    0.2
}

fn default_sales() -> f64 {
    0.1
}

fn default_recommendation_limit() -> usize {
    15
}
