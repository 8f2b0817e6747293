//! Dosage domain validation.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use rxscore_ingest::table::cell;
use rxscore_ingest::values::any_to_f64;
use rxscore_model::{Dosage, Field};
use rxscore_schema::SchemaRegistry;

use super::MAX_SAMPLES;
use crate::issue::Issue;

/// Check that every dosage exactly matches a permitted dosage.
///
/// Unparsable cells are left to the data type check.
pub fn check(df: &DataFrame, registry: &SchemaRegistry) -> Option<Issue> {
    let series = df.column(Field::DosageMg.column()).ok()?;
    let domain = registry.dosage_domain();

    let mut invalid_count = 0u64;
    let mut invalid = BTreeSet::new();
    for idx in 0..df.height() {
        let Some(dosage) = any_to_f64(cell(series, idx)).and_then(|v| Dosage::new(v).ok())
        else {
            continue;
        };
        if !domain.contains(&dosage) {
            invalid_count += 1;
            invalid.insert(dosage);
        }
    }

    (invalid_count > 0).then(|| Issue::NotInDomain {
        column: Field::DosageMg.column().to_string(),
        invalid_count,
        invalid_values: invalid
            .into_iter()
            .take(MAX_SAMPLES)
            .map(|d| d.to_string())
            .collect(),
        allowed_count: domain.len(),
    })
}
