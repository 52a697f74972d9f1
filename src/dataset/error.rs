//! Dataset error types
//!
//! Everything that can go wrong while reading the launch CSV. All of these are
//! fatal at startup: the server never runs without a valid dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV structure or field decoding failed
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Record has an empty launch site
    #[error("Line {line}: launch site is empty")]
    EmptyLaunchSite { line: u64 },

    /// Record has an outcome class other than 0 or 1
    #[error("Line {line}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { line: u64, value: i64 },

    /// Record has a negative or non-finite payload mass
    #[error("Line {line}: invalid payload mass {value}")]
    InvalidPayload { line: u64, value: f64 },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
