//! Combination extraction.
//!
//! Projects every raw training row onto `(Condition, Drug_Name, Dosage_mg,
//! Side_Effects)` and deduplicates by exact equality. Any row that cannot be
//! projected is an error: a catalog built from partially readable data would
//! silently accept or reject the wrong requests.

use std::path::{Path, PathBuf};

use polars::prelude::{Column, DataFrame};
use tracing::info;

use rxscore_model::{Combination, Dosage, Field};
use rxscore_schema::CombinationCatalog;

use crate::error::{IngestError, Result};
use crate::table::{cell, read_raw_table, require_column};
use crate::values::{any_to_f64, any_to_text};

/// Counts reported after an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub rows: usize,
    pub combinations: usize,
    pub output: PathBuf,
}

/// Project each row of the raw table onto its combination key.
///
/// Row numbers in errors are 1-based data rows (the header is not counted).
pub fn project_combinations(df: &DataFrame) -> Result<Vec<Combination>> {
    let condition = require_column(df, Field::Condition.column())?;
    let drug_name = require_column(df, Field::DrugName.column())?;
    let dosage = require_column(df, Field::DosageMg.column())?;
    let side_effects = require_column(df, Field::SideEffects.column())?;

    let text = |column: &Column, field: Field, idx: usize| -> Result<String> {
        any_to_text(cell(column, idx)).ok_or_else(|| IngestError::MissingValue {
            row: idx + 1,
            column: field.column().to_string(),
        })
    };

    let mut projected = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let dosage_value = cell(dosage, idx);
        let dosage_mg = match any_to_text(dosage_value.clone()) {
            None => {
                return Err(IngestError::MissingValue {
                    row: idx + 1,
                    column: Field::DosageMg.column().to_string(),
                });
            }
            Some(raw) => any_to_f64(dosage_value)
                .and_then(|v| Dosage::new(v).ok())
                .ok_or(IngestError::InvalidValue {
                    row: idx + 1,
                    column: Field::DosageMg.column().to_string(),
                    value: raw,
                })?,
        };
        projected.push(Combination {
            condition: text(condition, Field::Condition, idx)?,
            drug_name: text(drug_name, Field::DrugName, idx)?,
            dosage_mg,
            side_effects: text(side_effects, Field::SideEffects, idx)?,
        });
    }
    Ok(projected)
}

/// Build the combination catalog from a raw training table.
pub fn extract(df: &DataFrame) -> Result<CombinationCatalog> {
    Ok(project_combinations(df)?.into_iter().collect())
}

/// Read raw data, extract the catalog and persist it.
///
/// Fails if the raw data is missing or unreadable; the output file is only
/// replaced once extraction succeeded.
pub fn extract_file(raw_path: &Path, output_path: &Path) -> Result<ExtractSummary> {
    let df = read_raw_table(raw_path)?;
    if df.height() == 0 {
        return Err(IngestError::EmptyData);
    }
    let catalog = extract(&df)?;
    catalog.write_to_path(output_path)?;

    info!(
        raw = %raw_path.display(),
        output = %output_path.display(),
        rows = df.height(),
        combinations = catalog.len(),
        "extracted valid combinations"
    );

    Ok(ExtractSummary {
        rows: df.height(),
        combinations: catalog.len(),
        output: output_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame(dosages: Series) -> DataFrame {
        let n = dosages.len();
        DataFrame::new(vec![
            Series::new("Condition".into(), vec!["Diabetes"; n]).into_column(),
            Series::new("Drug_Name".into(), vec!["Metformin"; n]).into_column(),
            dosages.into_column(),
            Series::new("Side_Effects".into(), vec!["Nausea"; n]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn integer_and_float_dosages_collapse() {
        let df = frame(Series::new("Dosage_mg".into(), vec!["500", "500.0"]));
        let catalog = extract(&df).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn near_equal_dosages_stay_distinct() {
        let df = frame(Series::new("Dosage_mg".into(), vec![500.0f64, 500.5]));
        assert_eq!(extract(&df).unwrap().len(), 2);
    }

    #[test]
    fn non_numeric_dosage_names_row() {
        let df = frame(Series::new("Dosage_mg".into(), vec!["500", "lots"]));
        let err = extract(&df).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidValue { row: 2, ref value, .. } if value == "lots"
        ));
    }

    #[test]
    fn blank_dosage_is_missing() {
        let df = frame(Series::new("Dosage_mg".into(), vec!["500", " "]));
        assert!(matches!(
            extract(&df).unwrap_err(),
            IngestError::MissingValue { row: 2, .. }
        ));
    }
}
