#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema configuration not found: {path}")]
    ConfigMissing { path: PathBuf },

    #[error("failed to parse schema configuration {path}: {message}")]
    ConfigMalformed { path: PathBuf, message: String },

    #[error("combination catalog not found: {path}")]
    CatalogMissing { path: PathBuf },

    #[error("failed to parse combination catalog {path}: {message}")]
    CatalogMalformed { path: PathBuf, message: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
