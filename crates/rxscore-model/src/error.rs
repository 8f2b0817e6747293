use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("dosage must be a finite number, got {0}")]
    NonFiniteDosage(f64),
    #[error("improvement score {score} is outside [{min}, {max}]")]
    ScoreOutOfRange { score: f64, min: f64, max: f64 },
    #[error("invalid request payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
