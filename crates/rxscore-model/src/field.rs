//! Columns of the clinical record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field is constrained by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Opaque identifier, never checked against a domain.
    Identifier,
    /// Integer bounded by an inclusive range.
    Range,
    /// String drawn from an enumerated domain.
    Categorical,
    /// Number drawn from the enumerated dosage domain.
    Dosage,
    /// Model target, only present in training data.
    Target,
}

/// A column of the training table / a field of a prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Patient_ID")]
    PatientId,
    Age,
    Gender,
    Condition,
    #[serde(rename = "Drug_Name")]
    DrugName,
    #[serde(rename = "Dosage_mg")]
    DosageMg,
    #[serde(rename = "Treatment_Duration_days")]
    TreatmentDurationDays,
    #[serde(rename = "Side_Effects")]
    SideEffects,
    #[serde(rename = "Improvement_Score")]
    ImprovementScore,
}

impl Field {
    /// All fields in training-table column order.
    pub const ALL: [Field; 9] = [
        Field::PatientId,
        Field::Age,
        Field::Gender,
        Field::Condition,
        Field::DrugName,
        Field::DosageMg,
        Field::TreatmentDurationDays,
        Field::SideEffects,
        Field::ImprovementScore,
    ];

    /// Fields with an enumerated string domain.
    pub const CATEGORICAL: [Field; 4] = [
        Field::Gender,
        Field::Condition,
        Field::DrugName,
        Field::SideEffects,
    ];

    /// Fields forming the combination key, in key order.
    pub const COMBINATION_KEY: [Field; 4] = [
        Field::Condition,
        Field::DrugName,
        Field::DosageMg,
        Field::SideEffects,
    ];

    /// Column name as it appears in CSV headers and JSON payloads.
    pub fn column(self) -> &'static str {
        match self {
            Field::PatientId => "Patient_ID",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Condition => "Condition",
            Field::DrugName => "Drug_Name",
            Field::DosageMg => "Dosage_mg",
            Field::TreatmentDurationDays => "Treatment_Duration_days",
            Field::SideEffects => "Side_Effects",
            Field::ImprovementScore => "Improvement_Score",
        }
    }

    /// Look up a field by its exact column name.
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == name)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::PatientId => FieldKind::Identifier,
            Field::Age | Field::TreatmentDurationDays => FieldKind::Range,
            Field::Gender | Field::Condition | Field::DrugName | Field::SideEffects => {
                FieldKind::Categorical
            }
            Field::DosageMg => FieldKind::Dosage,
            Field::ImprovementScore => FieldKind::Target,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
