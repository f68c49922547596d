//! Output configuration

use serde::Deserialize;

use crate::adapters::report::ReportFormat;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Report serialization format
    #[serde(default)]
    pub format: ReportFormat,
}
