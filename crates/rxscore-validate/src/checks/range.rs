//! Numeric range validation.

use polars::prelude::DataFrame;

use rxscore_ingest::table::cell;
use rxscore_ingest::values::{any_to_f64, any_to_text};
use rxscore_model::Field;
use rxscore_schema::SchemaRegistry;

use super::MAX_SAMPLES;
use crate::issue::Issue;

/// Check Age, Treatment_Duration_days and Improvement_Score against their ranges.
pub fn check(df: &DataFrame, registry: &SchemaRegistry) -> Vec<Issue> {
    let score = registry.score_range();
    let mut bounds = vec![(Field::ImprovementScore, score.min, score.max)];
    for field in [Field::Age, Field::TreatmentDurationDays] {
        if let Some(range) = registry.range_for(field) {
            bounds.push((field, range.min as f64, range.max as f64));
        }
    }
    bounds.sort_by_key(|(field, ..)| *field);

    bounds
        .into_iter()
        .filter_map(|(field, min, max)| check_column(df, field, min, max))
        .collect()
}

fn check_column(df: &DataFrame, field: Field, min: f64, max: f64) -> Option<Issue> {
    let series = df.column(field.column()).ok()?;

    let mut invalid_count = 0u64;
    let mut samples = Vec::new();
    for idx in 0..df.height() {
        let value = cell(series, idx);
        let Some(number) = any_to_f64(value.clone()).filter(|v| v.is_finite()) else {
            continue;
        };
        if number < min || number > max {
            invalid_count += 1;
            if samples.len() < MAX_SAMPLES
                && let Some(text) = any_to_text(value)
                && !samples.contains(&text)
            {
                samples.push(text);
            }
        }
    }

    (invalid_count > 0).then(|| Issue::OutOfRange {
        column: field.column().to_string(),
        invalid_count,
        min,
        max,
        samples,
    })
}
