#![deny(unsafe_code)]

//! Request validation and training table conformance.
//!
//! Two entry points share one [`SchemaRegistry`]:
//!
//! - [`validate`]: checks a single prediction request in two phases. Every
//!   field is checked and all violations are collected; the combination is
//!   checked only when every field passed.
//! - [`validate_dataset`]: checks a whole training table before it is used
//!   for training.
//!
//! # Example
//!
//! ```ignore
//! use rxscore_validate::{validate, RejectionKind};
//!
//! match validate(&request, &registry) {
//!     Ok(record) => score(&record),
//!     Err(rejection) if rejection.kind() == RejectionKind::FieldViolation => {
//!         for message in rejection.messages() {
//!             eprintln!("{message}");
//!         }
//!     }
//!     Err(rejection) => eprintln!("{rejection}"),
//! }
//! ```

mod checks;
mod issue;
mod record;
mod report;
mod request;
mod violation;

use polars::prelude::DataFrame;
use rxscore_schema::SchemaRegistry;

pub use issue::{Issue, Severity};
pub use record::ValidatedRecord;
pub use report::DatasetReport;
pub use request::validate;
pub use violation::{Rejection, RejectionKind, Violation};

/// Validate a training table against the registry.
///
/// Runs all checks:
/// - configured columns present and populated
/// - numeric columns numeric, Age and duration integral
/// - categorical values within their domains
/// - Age, Treatment_Duration_days and Improvement_Score within their ranges
/// - dosages within the dosage domain
/// - row combinations present in a non-empty catalog
pub fn validate_dataset(df: &DataFrame, registry: &SchemaRegistry) -> DatasetReport {
    checks::run_all(df, registry)
}
