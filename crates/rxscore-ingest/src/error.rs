//! Error types for raw data ingestion and extraction.

use std::path::PathBuf;
use thiserror::Error;

use rxscore_schema::SchemaError;

/// Errors raised while reading raw training data or producing artifacts from it.
///
/// Extraction is an offline, operator-run step: every one of these stops the
/// step rather than producing a partial or empty artifact.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Raw data file not found.
    #[error("raw data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Raw data has no rows.
    #[error("raw data has no rows")]
    EmptyData,

    // === Record Errors ===
    /// Required column not found in the raw data.
    #[error("required column '{column}' not found in raw data")]
    MissingColumn { column: String },

    /// A required cell is empty.
    #[error("row {row}: column '{column}' is empty")]
    MissingValue { row: usize, column: String },

    /// A cell could not be interpreted as the column's type.
    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Output Errors ===
    /// Failed to persist a derived artifact.
    #[error(transparent)]
    Output(#[from] SchemaError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
