//! Raw training table loading.

use std::path::Path;

use polars::prelude::{AnyValue, Column, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Reads a raw training CSV (single header row) into a DataFrame.
///
/// The whole file is scanned for schema inference so a late fractional value
/// cannot break an integer-typed column.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "raw table loaded"
    );
    Ok(df)
}

/// Returns true if the frame has a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
}

/// Look up a required column.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    if !has_column(df, name) {
        return Err(IngestError::MissingColumn {
            column: name.to_string(),
        });
    }
    Ok(df.column(name)?)
}

/// Cell value, treating out-of-bounds access as null.
pub fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}
