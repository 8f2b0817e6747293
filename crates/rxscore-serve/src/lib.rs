#![deny(unsafe_code)]

//! Serving-layer contract for treatment outcome scoring.
//!
//! No HTTP framework lives here. A server wraps [`PredictionService`] and
//! maps [`ServeError::status_code`] onto its responses.

mod error;
mod handle;
mod scorer;
mod service;

pub use error::{ErrorBody, Result, ScoreError, ServeError};
pub use handle::RegistryHandle;
pub use scorer::Scorer;
pub use service::PredictionService;
