//! Combination consistency against the catalog.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use rxscore_ingest::project_combinations;
use rxscore_schema::SchemaRegistry;

use super::MAX_SAMPLES;
use crate::issue::Issue;

/// Count rows whose combination is absent from the catalog.
///
/// Skipped when any key column is missing or a key cell is unreadable; those
/// problems are reported by the presence and type checks.
pub fn check(df: &DataFrame, registry: &SchemaRegistry) -> Option<Issue> {
    let combinations = project_combinations(df).ok()?;

    let mut row_count = 0u64;
    let mut unknown = BTreeSet::new();
    for combination in combinations {
        if !registry.catalog().contains(&combination) {
            row_count += 1;
            unknown.insert(combination);
        }
    }

    (row_count > 0).then(|| Issue::UnknownCombination {
        row_count,
        samples: unknown.into_iter().take(MAX_SAMPLES).collect(),
    })
}
