use std::path::PathBuf;

use rxscore_schema::SchemaConfig;
use rxscore_validate::{DatasetReport, Rejection};

#[derive(Debug)]
pub struct DeriveResult {
    pub raw: PathBuf,
    pub rows: usize,
    pub config: SchemaConfig,
    /// Where the document was written; `None` on a dry run.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub patient_id: String,
    pub rejection: Option<Rejection>,
}

#[derive(Debug)]
pub struct CheckResult {
    pub source: PathBuf,
    pub fingerprint: String,
    pub degraded: bool,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckResult {
    pub fn rejected(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.rejection.is_some())
            .count()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected() > 0
    }
}

#[derive(Debug)]
pub struct ValidateResult {
    pub raw: PathBuf,
    pub report: DatasetReport,
}
