//! Categorical domain validation.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use rxscore_ingest::table::cell;
use rxscore_ingest::values::any_to_text;
use rxscore_model::Field;
use rxscore_schema::SchemaRegistry;

use super::MAX_SAMPLES;
use crate::issue::Issue;

/// Check that categorical values are members of their domains.
pub fn check(df: &DataFrame, registry: &SchemaRegistry) -> Vec<Issue> {
    let mut issues = Vec::new();

    for field in Field::CATEGORICAL {
        let Ok(series) = df.column(field.column()) else {
            continue;
        };
        let domain = registry.domain_for(field);

        let mut invalid_count = 0u64;
        let mut invalid = BTreeSet::new();
        for idx in 0..df.height() {
            let Some(value) = any_to_text(cell(series, idx)) else {
                continue;
            };
            if !domain.contains(value.as_str()) {
                invalid_count += 1;
                invalid.insert(value);
            }
        }

        if invalid_count > 0 {
            issues.push(Issue::NotInDomain {
                column: field.column().to_string(),
                invalid_count,
                invalid_values: invalid.into_iter().take(MAX_SAMPLES).collect(),
                allowed_count: domain.len(),
            });
        }
    }

    issues
}
