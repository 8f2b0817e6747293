//! Framework-free prediction service.

use std::sync::Arc;

use tracing::{debug, warn};

use rxscore_model::{HealthStatus, PredictionRequest, PredictionResponse};
use rxscore_validate::validate;

use crate::error::{Result, ServeError};
use crate::handle::RegistryHandle;
use crate::scorer::Scorer;

/// Validates requests against the current registry and scores them.
pub struct PredictionService {
    registry: RegistryHandle,
    scorer: Option<Arc<dyn Scorer>>,
}

impl PredictionService {
    pub fn new(registry: RegistryHandle, scorer: Option<Arc<dyn Scorer>>) -> Self {
        Self { registry, scorer }
    }

    pub fn registry(&self) -> &RegistryHandle {
        &self.registry
    }

    /// Install or replace the model.
    pub fn set_scorer(&mut self, scorer: Arc<dyn Scorer>) {
        self.scorer = Some(scorer);
    }

    /// Validate against the current registry snapshot, then score.
    ///
    /// Validation runs before the model check, so an invalid request is
    /// rejected even when no model is loaded.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let registry = self.registry.snapshot();
        let record = validate(request, &registry)?;

        let Some(scorer) = self.scorer.as_deref() else {
            warn!("prediction requested without a loaded model");
            return Err(ServeError::ModelUnavailable);
        };

        let score = scorer.score(&record)?;
        let response = PredictionResponse::new(record.patient_id(), score, scorer.version())
            .map_err(|_| ServeError::InvalidScore(score))?;

        debug!(
            model_version = scorer.version(),
            fingerprint = %registry.fingerprint(),
            "prediction served"
        );
        Ok(response)
    }

    /// Parse and predict a single JSON request.
    pub fn predict_json(&self, payload: &str) -> Result<PredictionResponse> {
        let request = PredictionRequest::from_json(payload).map_err(ServeError::MalformedRequest)?;
        self.predict(&request)
    }

    /// Parse a JSON object or array and predict each request independently.
    pub fn predict_batch_json(&self, payload: &str) -> Result<Vec<Result<PredictionResponse>>> {
        let requests =
            PredictionRequest::batch_from_json(payload).map_err(ServeError::MalformedRequest)?;
        Ok(requests.iter().map(|request| self.predict(request)).collect())
    }

    pub fn health(&self) -> HealthStatus {
        let registry = self.registry.snapshot();
        HealthStatus::healthy(
            self.scorer.as_deref().map(Scorer::version),
            registry.is_degraded(),
            registry.fingerprint(),
        )
    }
}
