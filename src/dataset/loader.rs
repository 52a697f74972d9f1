//! CSV loading
//!
//! Reads the launch CSV by header name. Only the four dashboard columns are
//! decoded; any other column is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, LaunchRecord};

/// Columns every launch CSV must carry
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

impl Dataset {
    /// Load and validate a dataset from a CSV file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_csv_reader(file)?.with_source(path);

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            sites = dataset.launch_sites().len(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load and validate a dataset from any CSV byte stream
    pub fn from_csv_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let record: LaunchRecord = row.deserialize(Some(&headers))?;
            record.validate(line)?;
            records.push(record);
        }

        tracing::debug!(records = records.len(), "Decoded launch CSV");

        Ok(Dataset::from_validated(records))
    }

    /// Load a dataset from an in-memory CSV string (useful for testing)
    pub fn from_csv_str(csv_data: &str) -> DatasetResult<Self> {
        Self::from_csv_reader(csv_data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,0,F9 v1.0  B0004,v1.0
3,VAFB SLC-4E,1,500,F9 v1.1  B1003,v1.1
4,KSC LC-39A,1,9600,F9 FT B1031.1,FT
";

    #[test]
    fn test_load_from_str_ignores_extra_columns() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.records()[2].launch_site, "VAFB SLC-4E");
        assert_eq!(dataset.records()[2].payload_mass_kg, 500.0);
        assert_eq!(dataset.records()[3].booster_version_category, "FT");
        assert!(dataset.records()[3].is_success());
        assert!(dataset.source().is_none());
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Launch Site,class,Payload Mass (kg)\nCCAFS LC-40,1,100\n";
        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Booster Version Category")));
    }

    #[test]
    fn test_bad_outcome_reports_line() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,100,FT
CCAFS LC-40,3,100,FT
";
        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidOutcome { line: 3, value: 3 }));
    }

    #[test]
    fn test_bad_payload_reports_csv_line() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,100,FT
CCAFS LC-40,1,200,FT
KSC LC-39A,0,-5,FT
";
        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPayload { line: 4, .. }));
    }

    #[test]
    fn test_unparseable_payload_is_csv_error() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,heavy,FT
";
        let err = Dataset::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.source(), Some(file.path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
