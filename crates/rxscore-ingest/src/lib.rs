#![deny(unsafe_code)]

//! Raw training data ingestion.
//!
//! Reads the raw training CSV with polars, extracts the combination catalog
//! and derives the schema configuration that the registry later loads.

pub mod derive;
pub mod error;
pub mod extract;
pub mod table;
pub mod values;

pub use derive::derive_schema;
pub use error::{IngestError, Result};
pub use extract::{ExtractSummary, extract, extract_file, project_combinations};
pub use table::{has_column, read_raw_table, require_column};
