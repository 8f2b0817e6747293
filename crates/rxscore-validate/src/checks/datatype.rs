//! Data type validation.
//!
//! Checks that numeric columns contain numbers and that integer columns
//! contain whole numbers.

use polars::prelude::DataFrame;

use rxscore_ingest::table::cell;
use rxscore_ingest::values::{any_to_f64, any_to_i64, any_to_text};
use rxscore_model::{Field, FieldKind};

use super::MAX_SAMPLES;
use crate::issue::Issue;

pub fn check(df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();

    for field in Field::ALL {
        let expected = match field.kind() {
            FieldKind::Range => "integer",
            FieldKind::Dosage | FieldKind::Target => "numeric",
            FieldKind::Identifier | FieldKind::Categorical => continue,
        };
        let Ok(series) = df.column(field.column()) else {
            continue;
        };

        let mut invalid_count = 0u64;
        let mut samples = Vec::new();
        for idx in 0..df.height() {
            let value = cell(series, idx);
            let Some(text) = any_to_text(value.clone()) else {
                continue; // Nulls are not type errors
            };
            let ok = match field.kind() {
                FieldKind::Range => any_to_i64(value).is_some(),
                _ => any_to_f64(value).is_some_and(f64::is_finite),
            };
            if !ok {
                invalid_count += 1;
                if samples.len() < MAX_SAMPLES && !samples.contains(&text) {
                    samples.push(text);
                }
            }
        }

        if invalid_count > 0 {
            issues.push(Issue::DataTypeMismatch {
                column: field.column().to_string(),
                expected: expected.to_string(),
                invalid_count,
                samples,
            });
        }
    }

    issues
}
