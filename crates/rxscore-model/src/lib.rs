//! Data model for treatment outcome scoring.
//!
//! These types describe the fixed clinical-record shape shared by the
//! training pipeline and the inference path:
//!
//! - [`PredictionRequest`]: one patient record as submitted for scoring
//! - [`Combination`]: the `(Condition, Drug_Name, Dosage_mg, Side_Effects)` key
//! - [`Dosage`]: a finite dosage with exact equality semantics
//! - [`PredictionResponse`] / [`HealthStatus`]: serving-layer payloads

pub mod combination;
pub mod dosage;
pub mod error;
pub mod field;
pub mod request;
pub mod response;

pub use combination::Combination;
pub use dosage::Dosage;
pub use error::{ModelError, Result};
pub use field::{Field, FieldKind};
pub use request::PredictionRequest;
pub use response::{DISCLAIMER, HealthStatus, PredictionResponse, SCORE_MAX, SCORE_MIN};
