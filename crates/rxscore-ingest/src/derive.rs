//! Schema derivation from raw training data.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::info;

use rxscore_model::{Dosage, Field};
use rxscore_schema::{Bounds, DEFAULT_SCORE_RANGE, SchemaConfig};

use crate::error::{IngestError, Result};
use crate::table::{cell, has_column, require_column};
use crate::values::{any_to_f64, any_to_i64, any_to_text};

/// Derive a schema configuration from a raw training table.
///
/// Categorical domains and the dosage domain are the sorted distinct values
/// of their columns; Age and Treatment_Duration_days ranges are the observed
/// min/max. The Improvement_Score range is observed as well when the column
/// exists and keeps the default otherwise.
pub fn derive_schema(df: &DataFrame) -> Result<SchemaConfig> {
    if df.height() == 0 {
        return Err(IngestError::EmptyData);
    }

    let score_range = if has_column(df, Field::ImprovementScore.column()) {
        float_bounds(
            require_column(df, Field::ImprovementScore.column())?,
            Field::ImprovementScore,
        )?
    } else {
        DEFAULT_SCORE_RANGE
    };

    let config = SchemaConfig {
        columns: df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        gender_values: distinct_text(df, Field::Gender)?,
        condition_values: distinct_text(df, Field::Condition)?,
        drug_values: distinct_text(df, Field::DrugName)?,
        side_effect_values: distinct_text(df, Field::SideEffects)?,
        dosage_values: distinct_dosages(df)?,
        age_range: integer_bounds(df, Field::Age)?,
        duration_range: integer_bounds(df, Field::TreatmentDurationDays)?,
        score_range,
    };

    info!(
        rows = df.height(),
        genders = config.gender_values.len(),
        conditions = config.condition_values.len(),
        drugs = config.drug_values.len(),
        side_effects = config.side_effect_values.len(),
        dosages = config.dosage_values.len(),
        age_range = %config.age_range,
        duration_range = %config.duration_range,
        "derived schema from raw data"
    );
    Ok(config)
}

fn distinct_text(df: &DataFrame, field: Field) -> Result<Vec<String>> {
    let column = require_column(df, field.column())?;
    let mut values = BTreeSet::new();
    for idx in 0..column.len() {
        let value = any_to_text(cell(column, idx)).ok_or_else(|| IngestError::MissingValue {
            row: idx + 1,
            column: field.column().to_string(),
        })?;
        values.insert(value);
    }
    Ok(values.into_iter().collect())
}

fn distinct_dosages(df: &DataFrame) -> Result<Vec<Dosage>> {
    let column = require_column(df, Field::DosageMg.column())?;
    let mut values = BTreeSet::new();
    for idx in 0..column.len() {
        let value = parse_cell(column, Field::DosageMg, idx, |v| {
            any_to_f64(v).and_then(|v| Dosage::new(v).ok())
        })?;
        values.insert(value);
    }
    Ok(values.into_iter().collect())
}

fn integer_bounds(df: &DataFrame, field: Field) -> Result<Bounds<i64>> {
    let column = require_column(df, field.column())?;
    let mut bounds: Option<Bounds<i64>> = None;
    for idx in 0..column.len() {
        let value = parse_cell(column, field, idx, any_to_i64)?;
        bounds = Some(match bounds {
            None => Bounds {
                min: value,
                max: value,
            },
            Some(b) => Bounds {
                min: b.min.min(value),
                max: b.max.max(value),
            },
        });
    }
    bounds.ok_or(IngestError::EmptyData)
}

fn float_bounds(column: &Column, field: Field) -> Result<Bounds<f64>> {
    let mut bounds: Option<Bounds<f64>> = None;
    for idx in 0..column.len() {
        let value = parse_cell(column, field, idx, |v| {
            any_to_f64(v).filter(|v| v.is_finite())
        })?;
        bounds = Some(match bounds {
            None => Bounds {
                min: value,
                max: value,
            },
            Some(b) => Bounds {
                min: b.min.min(value),
                max: b.max.max(value),
            },
        });
    }
    bounds.ok_or(IngestError::EmptyData)
}

/// Parse one cell, distinguishing blank cells from unparsable ones.
fn parse_cell<T>(
    column: &Column,
    field: Field,
    idx: usize,
    parse: impl Fn(AnyValue<'_>) -> Option<T>,
) -> Result<T> {
    let value = cell(column, idx);
    let Some(raw) = any_to_text(value.clone()) else {
        return Err(IngestError::MissingValue {
            row: idx + 1,
            column: field.column().to_string(),
        });
    };
    parse(value).ok_or_else(|| IngestError::InvalidValue {
        row: idx + 1,
        column: field.column().to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn raw_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Patient_ID".into(), vec!["P1", "P2", "P3"]).into_column(),
            Series::new("Age".into(), vec![55i64, 18, 79]).into_column(),
            Series::new("Gender".into(), vec!["Male", "Female", "Male"]).into_column(),
            Series::new("Condition".into(), vec!["Hypertension", "Diabetes", "Diabetes"])
                .into_column(),
            Series::new("Drug_Name".into(), vec!["Lisinopril", "Metformin", "Metformin"])
                .into_column(),
            Series::new("Dosage_mg".into(), vec![10.0f64, 500.0, 500.0]).into_column(),
            Series::new("Treatment_Duration_days".into(), vec![30i64, 5, 59]).into_column(),
            Series::new("Side_Effects".into(), vec!["Dizziness", "Nausea", "Nausea"])
                .into_column(),
            Series::new("Improvement_Score".into(), vec![7.5f64, 2.0, 9.1]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn derives_sorted_domains_and_observed_ranges() {
        let config = derive_schema(&raw_frame()).unwrap();
        assert_eq!(config.columns.len(), 9);
        assert_eq!(config.columns[0], "Patient_ID");
        assert_eq!(config.gender_values, vec!["Female", "Male"]);
        assert_eq!(config.condition_values, vec!["Diabetes", "Hypertension"]);
        assert_eq!(
            config.dosage_values,
            vec![Dosage::new(10.0).unwrap(), Dosage::new(500.0).unwrap()]
        );
        assert_eq!(config.age_range, Bounds { min: 18, max: 79 });
        assert_eq!(config.duration_range, Bounds { min: 5, max: 59 });
        assert_eq!(config.score_range, Bounds { min: 2.0, max: 9.1 });
    }

    #[test]
    fn score_range_defaults_without_target_column() {
        let mut df = raw_frame();
        df.drop_in_place("Improvement_Score").unwrap();
        let config = derive_schema(&df).unwrap();
        assert_eq!(config.score_range, DEFAULT_SCORE_RANGE);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let mut df = raw_frame();
        df.drop_in_place("Age").unwrap();
        assert!(matches!(
            derive_schema(&df).unwrap_err(),
            IngestError::MissingColumn { column } if column == "Age"
        ));
    }

    #[test]
    fn empty_frame_is_an_error() {
        let df = raw_frame().head(Some(0));
        assert!(matches!(derive_schema(&df).unwrap_err(), IngestError::EmptyData));
    }
}
