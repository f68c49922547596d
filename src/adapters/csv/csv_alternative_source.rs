//! CSV Alternative Source Adapter
//!
//! Reads alternatives from a headered CSV file. Every column is located by
//! its header name, so column order in the file does not matter.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::topsis::Alternative;
use crate::ports::{AlternativeSource, SourceError};

/// CSV-backed source of alternatives
#[derive(Debug, Clone)]
pub struct CsvAlternativeSource {
    path: PathBuf,
    id_column: String,
    name_column: String,
}

impl CsvAlternativeSource {
    /// Create a source reading `path` with `id` and `name` columns
    ///
    /// # Example
    /// ```ignore
    /// let source = CsvAlternativeSource::new("./data/motors.csv")
    ///     .with_columns("id", "nama_motor");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            id_column: "id".to_string(),
            name_column: "name".to_string(),
        }
    }

    /// Override the identifier and display-name column headers
    pub fn with_columns(mut self, id_column: impl Into<String>, name_column: impl Into<String>) -> Self {
        self.id_column = id_column.into();
        self.name_column = name_column.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse alternatives from any reader
    ///
    /// Row numbers in errors are 1-based and exclude the header line.
    pub fn parse<R: Read>(&self, input: R, criteria: &[String]) -> Result<Vec<Alternative>, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| SourceError::Malformed(e.to_string()))?
            .clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SourceError::MissingColumn {
                    column: name.to_string(),
                })
        };

        let id_idx = column(self.id_column.as_str())?;
        let name_idx = column(self.name_column.as_str())?;
        let criterion_columns = criteria
            .iter()
            .map(|c| {
                headers
                    .iter()
                    .position(|h| h == c)
                    .map(|idx| (c.as_str(), idx))
                    .ok_or_else(|| SourceError::MissingCriterion {
                        criterion: c.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut alternatives = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(|e| SourceError::Malformed(e.to_string()))?;
            let row = i + 1;

            let id = record.get(id_idx).unwrap_or_default();
            if id.is_empty() {
                return Err(SourceError::InvalidValue {
                    row,
                    column: self.id_column.clone(),
                    value: String::new(),
                });
            }

            let mut alternative = Alternative::new(id, record.get(name_idx).unwrap_or_default());
            for (criterion, idx) in &criterion_columns {
                let raw = record.get(*idx).unwrap_or_default();
                let value = raw.parse::<f64>().map_err(|_| SourceError::InvalidValue {
                    row,
                    column: criterion.to_string(),
                    value: raw.to_string(),
                })?;
                alternative = alternative.with_value(*criterion, value);
            }
            alternatives.push(alternative);
        }

        Ok(alternatives)
    }
}

impl AlternativeSource for CsvAlternativeSource {
    fn load(&self, criteria: &[String]) -> Result<Vec<Alternative>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path).map_err(|e| SourceError::IoError(e.to_string()))?;
        let alternatives = self.parse(file, criteria)?;

        debug!(
            path = %self.path.display(),
            rows = alternatives.len(),
            "Loaded alternatives from CSV"
        );

        Ok(alternatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const MOTORS: &str = "\
id,name,price,max_speed,fuel_consumption,sales
1,Beat,17.5,100,60,5200
2,Vario 125,22.9,110,52,4100
3,NMAX,31.0,120,40,2800
";

    fn criteria() -> Vec<String> {
        vec![
            "price".to_string(),
            "max_speed".to_string(),
            "fuel_consumption".to_string(),
            "sales".to_string(),
        ]
    }

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_reads_all_rows() {
        let file = write_csv(MOTORS);
        let source = CsvAlternativeSource::new(file.path());

        let alternatives = source.load(&criteria()).unwrap();

        assert_eq!(alternatives.len(), 3);
        assert_eq!(alternatives[1].id, "2");
        assert_eq!(alternatives[1].name, "Vario 125");
        assert_eq!(alternatives[1].value("price"), Some(22.9));
        assert_eq!(alternatives[2].value("sales"), Some(2800.0));
    }

    #[test]
    fn test_columns_resolved_by_name_not_position() {
        let csv = "\
sales,name,fuel_consumption,id,max_speed,price
5200,Beat,60,1,100,17.5
";
        let source = CsvAlternativeSource::new("unused.csv");
        let alternatives = source.parse(csv.as_bytes(), &criteria()).unwrap();

        assert_eq!(alternatives[0].id, "1");
        assert_eq!(alternatives[0].value("price"), Some(17.5));
        assert_eq!(alternatives[0].value("sales"), Some(5200.0));
    }

    #[test]
    fn test_custom_id_and_name_columns() {
        let csv = "\
id,nama_motor,price
7,Scoopy,20.1
";
        let source = CsvAlternativeSource::new("unused.csv").with_columns("id", "nama_motor");
        let alternatives = source.parse(csv.as_bytes(), &["price".to_string()]).unwrap();

        assert_eq!(alternatives[0].name, "Scoopy");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let source = CsvAlternativeSource::new("unused.csv");
        let alternatives = source
            .parse(MOTORS.as_bytes(), &["price".to_string()])
            .unwrap();

        assert_eq!(alternatives[0].values.len(), 1);
    }

    #[test]
    fn test_missing_criterion_column() {
        let source = CsvAlternativeSource::new("unused.csv");
        let mut wanted = criteria();
        wanted.push("weight_kg".to_string());

        let result = source.parse(MOTORS.as_bytes(), &wanted);

        assert!(matches!(
            result,
            Err(SourceError::MissingCriterion { ref criterion }) if criterion == "weight_kg"
        ));
    }

    #[test]
    fn test_missing_name_column() {
        let csv = "id,price\n1,17.5\n";
        let source = CsvAlternativeSource::new("unused.csv");
        let result = source.parse(csv.as_bytes(), &["price".to_string()]);

        assert!(matches!(
            result,
            Err(SourceError::MissingColumn { ref column }) if column == "name"
        ));
    }

    #[test]
    fn test_invalid_number_reports_row_and_column() {
        let csv = "\
id,name,price
1,Beat,17.5
2,Vario,n/a
";
        let source = CsvAlternativeSource::new("unused.csv");
        let result = source.parse(csv.as_bytes(), &["price".to_string()]);

        match result {
            Err(SourceError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "price");
                assert_eq!(value, "n/a");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_id_is_invalid() {
        let csv = "\
id,name,price
,Beat,17.5
";
        let source = CsvAlternativeSource::new("unused.csv");
        let result = source.parse(csv.as_bytes(), &["price".to_string()]);

        assert!(matches!(result, Err(SourceError::InvalidValue { row: 1, .. })));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = "\
id,name,price
1,Beat
";
        let source = CsvAlternativeSource::new("unused.csv");
        let result = source.parse(csv.as_bytes(), &["price".to_string()]);

        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let csv = "id , name , price\n 1 , Beat , 17.5 \n";
        let source = CsvAlternativeSource::new("unused.csv");
        let alternatives = source.parse(csv.as_bytes(), &["price".to_string()]).unwrap();

        assert_eq!(alternatives[0].name, "Beat");
        assert_eq!(alternatives[0].value("price"), Some(17.5));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = CsvAlternativeSource::new(temp_dir.path().join("missing.csv"));

        let result = source.load(&criteria());

        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let file = write_csv("id,name,price\n");
        let source = CsvAlternativeSource::new(file.path());

        let alternatives = source.load(&["price".to_string()]).unwrap();

        assert!(alternatives.is_empty());
    }
}
