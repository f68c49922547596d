//! Data source configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Location and layout of the motorcycle table
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the CSV file
    #[serde(default = "default_path")]
    pub path: String,

    /// Header of the unique identifier column
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Header of the display name column
    #[serde(default = "default_name_column")]
    pub name_column: String,
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.path"));
        }
        if self.id_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.id_column"));
        }
        if self.name_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.name_column"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            id_column: default_id_column(),
            name_column: default_name_column(),
        }
    }
}

fn default_path() -> String {
    "motors.csv".to_string()
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_name_column() -> String {
    "name".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_config_defaults() {
        let config = DataConfig::default();
        assert_eq!(config.path, "motors.csv");
        assert_eq!(config.id_column, "id");
        assert_eq!(config.name_column, "name");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_path_rejected() {
        let config = DataConfig {
            path: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("data.path"))
        );
    }
}
