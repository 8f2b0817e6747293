use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single patient record submitted for scoring.
///
/// Deserialization only enforces shape and primitive types (all fields
/// required, `Age` and `Treatment_Duration_days` integral). Domain, range and
/// combination constraints are applied by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Drug_Name")]
    pub drug_name: String,
    #[serde(rename = "Dosage_mg")]
    pub dosage_mg: f64,
    #[serde(rename = "Treatment_Duration_days")]
    pub treatment_duration_days: i64,
    #[serde(rename = "Side_Effects")]
    pub side_effects: String,
}

impl PredictionRequest {
    /// Parse a request from a JSON object.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Parse either a single JSON object or an array of objects.
    pub fn batch_from_json(payload: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(vec![serde_json::from_value(value)?])
        }
    }
}
