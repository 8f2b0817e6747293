//! Serving errors and their status mapping.

use serde::Serialize;
use thiserror::Error;

use rxscore_validate::Rejection;

/// Failure reported by a [`crate::Scorer`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ScoreError {
    message: String,
}

impl ScoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    /// Payload is not a well-formed request.
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] rxscore_model::ModelError),

    /// Request failed validation.
    #[error("request rejected: {0}")]
    Rejected(Rejection),

    /// No model is loaded.
    #[error("model not loaded")]
    ModelUnavailable,

    /// The model produced a score outside the response range.
    #[error("model produced an invalid score: {0}")]
    InvalidScore(f64),

    /// The model failed.
    #[error("scoring failed: {0}")]
    Scorer(#[from] ScoreError),
}

impl ServeError {
    /// HTTP status a serving layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) | Self::Rejected(_) => 422,
            Self::ModelUnavailable => 503,
            Self::InvalidScore(_) | Self::Scorer(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Response body for the error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code(),
            detail: self.to_string(),
            rejection: match self {
                Self::Rejected(rejection) => Some(rejection.clone()),
                _ => None,
            },
        }
    }
}

impl From<Rejection> for ServeError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Serializable error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

pub type Result<T> = std::result::Result<T, ServeError>;
