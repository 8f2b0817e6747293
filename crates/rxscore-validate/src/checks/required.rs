//! Column presence and population.

use polars::prelude::DataFrame;

use rxscore_ingest::table::{cell, has_column};
use rxscore_ingest::values::any_to_text;

use crate::issue::Issue;

/// Check configured columns are present and populated, and flag extra columns.
pub fn check(df: &DataFrame, expected: &[String]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for column in expected {
        if !has_column(df, column) {
            issues.push(Issue::RequiredMissing {
                column: column.clone(),
            });
            continue;
        }

        let null_count = count_null_values(df, column);
        if null_count > 0 {
            issues.push(Issue::MissingValues {
                column: column.clone(),
                null_count,
            });
        }
    }

    for name in df.get_column_names() {
        if !expected.iter().any(|column| column.as_str() == name.as_str()) {
            issues.push(Issue::UnexpectedColumn {
                column: name.to_string(),
            });
        }
    }

    issues
}

/// Count null/blank values in a column.
fn count_null_values(df: &DataFrame, column: &str) -> u64 {
    let Ok(series) = df.column(column) else {
        return 0;
    };

    let mut count = 0u64;
    for idx in 0..df.height() {
        if any_to_text(cell(series, idx)).is_none() {
            count += 1;
        }
    }
    count
}
