//! Training table check modules.
//!
//! Each module performs a specific type of conformance check.

mod combination;
mod datatype;
mod domain;
mod dosage;
mod range;
mod required;

use polars::prelude::DataFrame;
use tracing::debug;

use rxscore_model::Field;
use rxscore_schema::SchemaRegistry;

use crate::report::DatasetReport;

const MAX_SAMPLES: usize = 5;

/// Run all checks on a training table.
pub fn run_all(df: &DataFrame, registry: &SchemaRegistry) -> DatasetReport {
    let expected = expected_columns(registry);
    let mut report = DatasetReport::new(df.height());

    // 1. Column presence and population
    report.extend(required::check(df, &expected));

    // 2. Numeric columns hold numbers
    report.extend(datatype::check(df));

    // 3. Categorical values within their domains
    report.extend(domain::check(df, registry));

    // 4. Age / duration / score within their ranges
    report.extend(range::check(df, registry));

    // 5. Dosages within the dosage domain
    report.extend(dosage::check(df, registry));

    // 6. Observed combinations against a non-empty catalog
    if !registry.catalog().is_empty() {
        report.extend(combination::check(df, registry));
    }

    debug!(
        rows = report.rows,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "training table checked"
    );
    report
}

/// Configured columns, or every record field when none are configured.
fn expected_columns(registry: &SchemaRegistry) -> Vec<String> {
    if registry.columns().is_empty() {
        Field::ALL.iter().map(|f| f.column().to_string()).collect()
    } else {
        registry.columns().to_vec()
    }
}
