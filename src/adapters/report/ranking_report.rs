//! Ranking Report - Serializable view of a ranked table.
//!
//! Flattens a `RankedResult` into rows keyed by criterion name so that the
//! output reads naturally as JSON or YAML.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::RankedResult;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

/// Errors raised while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}

/// Per-criterion summary of the intermediate TOPSIS values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub criterion: String,
    pub weight: f64,
    pub normalization_factor: f64,
    pub ideal_positive: f64,
    pub ideal_negative: f64,
}

/// One ranked alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub rank: f64,
    pub id: String,
    pub name: String,
    pub closeness: f64,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
    pub values: BTreeMap<String, f64>,
    /// Row of the weighted normalized matrix
    pub weighted: BTreeMap<String, f64>,
}

/// Complete ranking report, rows ordered by rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub criteria: Vec<CriterionSummary>,
    pub rows: Vec<ReportRow>,
}

impl RankingReport {
    pub fn from_result(result: &RankedResult) -> Self {
        let criteria = result
            .criteria
            .iter()
            .zip(&result.weights)
            .zip(&result.normalization_factors)
            .zip(result.ideal_positive.iter().zip(&result.ideal_negative))
            .map(
                |(((criterion, &weight), &normalization_factor), (&ideal_positive, &ideal_negative))| {
                    CriterionSummary {
                        criterion: criterion.clone(),
                        weight,
                        normalization_factor,
                        ideal_positive,
                        ideal_negative,
                    }
                },
            )
            .collect();

        let by_criterion = |row: &[f64]| -> BTreeMap<String, f64> {
            result.criteria.iter().cloned().zip(row.iter().copied()).collect()
        };

        let rows = result
            .ranked()
            .into_iter()
            .map(|alt| ReportRow {
                rank: alt.rank,
                id: alt.id.clone(),
                name: alt.name.clone(),
                closeness: alt.closeness,
                distance_to_ideal: alt.distance_to_ideal,
                distance_to_anti_ideal: alt.distance_to_anti_ideal,
                values: by_criterion(alt.values.as_slice()),
                weighted: by_criterion(alt.weighted.as_slice()),
            })
            .collect();

        Self { criteria, rows }
    }
}

/// Renders reports in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Render any serializable report to a string
    pub fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }

    /// Render and write, terminating the output with a newline
    pub fn write_to<T: Serialize, W: Write>(&self, report: &T, mut out: W) -> Result<(), ReportError> {
        let rendered = self.render(report)?;
        out.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{Alternative, TopsisEngine, WeightMap};

    fn ranked() -> RankedResult {
        let alternatives = vec![
            Alternative::new("A", "Alpha")
                .with_value("price", 10.0)
                .with_value("sales", 100.0),
            Alternative::new("B", "Beta")
                .with_value("price", 15.0)
                .with_value("sales", 150.0),
        ];
        let weights = WeightMap::new().with_weight("price", 0.5).with_weight("sales", 0.5);
        TopsisEngine::new().compute_ranking(&alternatives, &weights).unwrap()
    }

    #[test]
    fn report_rows_follow_rank_order() {
        let report = RankingReport::from_result(&ranked());

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].id, "B");
        assert_eq!(report.rows[0].rank, 1.0);
        assert_eq!(report.rows[1].id, "A");
    }

    #[test]
    fn report_keys_values_by_criterion() {
        let report = RankingReport::from_result(&ranked());

        assert_eq!(report.rows[0].values.get("price"), Some(&15.0));
        assert_eq!(report.rows[0].values.get("sales"), Some(&150.0));

        let expected = 15.0 / 325.0_f64.sqrt() * 0.5;
        let weighted = report.rows[0].weighted.get("price").copied().unwrap();
        assert!((weighted - expected).abs() < 1e-12);
        assert_eq!(report.rows[0].weighted.len(), 2);
    }

    #[test]
    fn json_output_exposes_weighted_matrix() {
        let report = RankingReport::from_result(&ranked());
        let rendered = serde_json::to_string(&report).unwrap();

        assert!(rendered.contains("\"weighted\""));
    }

    #[test]
    fn mismatched_artifact_lengths_do_not_panic() {
        let mut result = ranked();
        result.ideal_negative.pop();
        result.alternatives[0].values.pop();

        let report = RankingReport::from_result(&result);

        assert_eq!(report.criteria.len(), 1);
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn report_summarizes_each_criterion() {
        let report = RankingReport::from_result(&ranked());

        assert_eq!(report.criteria.len(), 2);
        assert_eq!(report.criteria[0].criterion, "price");
        assert_eq!(report.criteria[0].weight, 0.5);
        assert!((report.criteria[0].normalization_factor - 325.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn json_output_parses_back() {
        let report = RankingReport::from_result(&ranked());
        let rendered = ReportWriter::new(ReportFormat::Json).render(&report).unwrap();

        let parsed: RankingReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.rows[0].id, "B");
    }

    #[test]
    fn yaml_output_contains_names() {
        let report = RankingReport::from_result(&ranked());
        let rendered = ReportWriter::new(ReportFormat::Yaml).render(&report).unwrap();

        assert!(rendered.contains("name: Beta"));
        assert!(rendered.contains("criterion: price"));
    }

    #[test]
    fn write_to_ends_with_newline() {
        let report = RankingReport::from_result(&ranked());
        let mut buf = Vec::new();

        ReportWriter::default().write_to(&report, &mut buf).unwrap();

        assert_eq!(buf.last(), Some(&b'\n'));
    }

    #[test]
    fn format_deserializes_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"yaml\"").unwrap();
        assert_eq!(format, ReportFormat::Yaml);
    }
}
