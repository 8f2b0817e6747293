use rxscore_validate::ValidatedRecord;

use crate::error::ScoreError;

/// A loaded regression model.
///
/// Implementations only ever see records that passed validation.
pub trait Scorer: Send + Sync {
    /// Version identifier echoed in every response.
    fn version(&self) -> &str;

    /// Predict the improvement score for one record.
    fn score(&self, record: &ValidatedRecord) -> Result<f64, ScoreError>;
}
