use serde::Serialize;

use rxscore_model::{Combination, Dosage, PredictionRequest};

/// A request that passed both validation phases.
///
/// Only [`crate::validate`] constructs this type, so holding one is proof that
/// every field and the combination were checked against a registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRecord {
    #[serde(rename = "Patient_ID")]
    patient_id: String,
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Treatment_Duration_days")]
    treatment_duration_days: i64,
    #[serde(flatten)]
    combination: Combination,
}

impl ValidatedRecord {
    pub(crate) fn new(request: &PredictionRequest, dosage_mg: Dosage) -> Self {
        Self {
            patient_id: request.patient_id.clone(),
            age: request.age,
            gender: request.gender.clone(),
            treatment_duration_days: request.treatment_duration_days,
            combination: Combination::new(
                request.condition.as_str(),
                request.drug_name.as_str(),
                dosage_mg,
                request.side_effects.as_str(),
            ),
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn condition(&self) -> &str {
        &self.combination.condition
    }

    pub fn drug_name(&self) -> &str {
        &self.combination.drug_name
    }

    pub fn dosage_mg(&self) -> Dosage {
        self.combination.dosage_mg
    }

    pub fn treatment_duration_days(&self) -> i64 {
        self.treatment_duration_days
    }

    pub fn side_effects(&self) -> &str {
        &self.combination.side_effects
    }

    /// The `(Condition, Drug_Name, Dosage_mg, Side_Effects)` key of this record.
    pub fn combination(&self) -> &Combination {
        &self.combination
    }
}
