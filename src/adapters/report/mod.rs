//! Report Adapters
//!
//! Render ranking output as JSON or YAML.

mod ranking_report;

pub use ranking_report::{
    CriterionSummary, RankingReport, ReportError, ReportFormat, ReportRow, ReportWriter,
};
