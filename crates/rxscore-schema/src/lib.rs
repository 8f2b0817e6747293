#![deny(unsafe_code)]

//! Schema registry shared by training and inference.
//!
//! - [`SchemaConfig`]: the `schema` table of the shared configuration document
//! - [`CombinationCatalog`]: the persisted set of observed combinations
//! - [`SchemaRegistry`]: both of the above, loaded once and queried per request

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
mod fs;
pub mod hash;
pub mod paths;
pub mod registry;

pub use crate::catalog::CombinationCatalog;
pub use crate::config::{
    Bounds, ConfigFormat, DEFAULT_AGE_RANGE, DEFAULT_DURATION_RANGE, DEFAULT_SCORE_RANGE,
    SchemaConfig,
};
pub use crate::domain::Domain;
pub use crate::error::{Result, SchemaError};
pub use crate::paths::{SchemaPaths, project_root, raw_data_path};
pub use crate::registry::{LoadReport, SchemaRegistry, SourceStatus};
