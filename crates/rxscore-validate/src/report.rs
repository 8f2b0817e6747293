//! Validation report containing all issues for a training table.

use serde::Serialize;

use crate::issue::{Issue, Severity};

/// Validation report for a training table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetReport {
    pub rows: usize,
    pub issues: Vec<Issue>,
}

impl DatasetReport {
    /// Create an empty report for a table with `rows` data rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            issues: Vec::new(),
        }
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Check if the report has any issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Count of errors.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    /// Count of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    /// Check if report has any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Messages for every issue, errors first.
    pub fn messages(&self) -> Vec<String> {
        let mut issues: Vec<_> = self.issues.iter().collect();
        issues.sort_by_key(|i| match i.severity() {
            Severity::Error => 0,
            Severity::Warning => 1,
        });
        issues.into_iter().map(Issue::message).collect()
    }
}
