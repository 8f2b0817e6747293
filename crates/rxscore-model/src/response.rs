use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// Non-clinical disclaimer attached to every prediction.
pub const DISCLAIMER: &str = "This system predicts patient treatment outcome scores to support \
clinical research, quality analysis, and exploratory analytics. \
It does not provide diagnostic or treatment recommendations.";

/// Successful prediction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Improvement_Score")]
    pub improvement_score: f64,
    pub model_version: String,
    pub disclaimer: String,
}

impl PredictionResponse {
    /// Build a response, rejecting scores outside `[SCORE_MIN, SCORE_MAX]`.
    pub fn new(
        patient_id: impl Into<String>,
        improvement_score: f64,
        model_version: impl Into<String>,
    ) -> Result<Self> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&improvement_score) {
            return Err(ModelError::ScoreOutOfRange {
                score: improvement_score,
                min: SCORE_MIN,
                max: SCORE_MAX,
            });
        }
        Ok(Self {
            patient_id: patient_id.into(),
            improvement_score,
            model_version: model_version.into(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }
}

/// Liveness payload for the serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub model_version: String,
    /// True when the schema or catalog fell back to empty defaults at load.
    pub schema_degraded: bool,
    pub schema_fingerprint: String,
}

impl HealthStatus {
    pub fn healthy(
        model_version: Option<&str>,
        schema_degraded: bool,
        schema_fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded: model_version.is_some(),
            model_version: model_version.unwrap_or("unknown").to_string(),
            schema_degraded,
            schema_fingerprint: schema_fingerprint.into(),
        }
    }
}
