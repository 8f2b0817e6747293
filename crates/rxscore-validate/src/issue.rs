//! Training table issues.
//!
//! The Issue enum describes one conformance problem in a whole table; each
//! variant carries only its needed data.

use serde::Serialize;

use rxscore_model::Combination;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Table must not be used for training
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Table-level validation issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Issue {
    // Presence checks
    /// Configured column is missing from the table
    RequiredMissing { column: String },
    /// Column present but has blank or null cells
    MissingValues { column: String, null_count: u64 },
    /// Column present in the table but not configured
    UnexpectedColumn { column: String },

    // Type checks
    /// Numeric column contains values of the wrong type
    DataTypeMismatch {
        column: String,
        expected: String,
        invalid_count: u64,
        samples: Vec<String>,
    },

    // Schema checks
    /// Values outside the column's enumerated domain
    NotInDomain {
        column: String,
        invalid_count: u64,
        invalid_values: Vec<String>,
        allowed_count: usize,
    },
    /// Values outside the column's inclusive range
    OutOfRange {
        column: String,
        invalid_count: u64,
        min: f64,
        max: f64,
        samples: Vec<String>,
    },

    // Consistency checks
    /// Rows whose combination is absent from the catalog
    UnknownCombination {
        row_count: u64,
        samples: Vec<Combination>,
    },
}

impl Issue {
    /// Column the issue refers to, if it is about a single column.
    pub fn column(&self) -> Option<&str> {
        match self {
            Issue::RequiredMissing { column }
            | Issue::MissingValues { column, .. }
            | Issue::UnexpectedColumn { column }
            | Issue::DataTypeMismatch { column, .. }
            | Issue::NotInDomain { column, .. }
            | Issue::OutOfRange { column, .. } => Some(column),
            Issue::UnknownCombination { .. } => None,
        }
    }

    /// Count of offending cells or rows (if applicable).
    pub fn count(&self) -> Option<u64> {
        match self {
            Issue::RequiredMissing { .. } | Issue::UnexpectedColumn { .. } => None,
            Issue::MissingValues { null_count, .. } => Some(*null_count),
            Issue::DataTypeMismatch { invalid_count, .. } => Some(*invalid_count),
            Issue::NotInDomain { invalid_count, .. } => Some(*invalid_count),
            Issue::OutOfRange { invalid_count, .. } => Some(*invalid_count),
            Issue::UnknownCombination { row_count, .. } => Some(*row_count),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnexpectedColumn { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::RequiredMissing { column } => format!("Required column {column} is missing"),

            Issue::MissingValues { column, null_count } => {
                format!("Column {column} has {null_count} empty values")
            }

            Issue::UnexpectedColumn { column } => {
                format!("Column {column} is not part of the configured schema")
            }

            Issue::DataTypeMismatch {
                column,
                expected,
                invalid_count,
                samples,
            } => format!(
                "Column {column} has {invalid_count} non-{expected} values{}",
                sample_suffix(samples)
            ),

            Issue::NotInDomain {
                column,
                invalid_count,
                invalid_values,
                allowed_count,
            } => {
                let values_str = if invalid_values.is_empty() {
                    String::new()
                } else {
                    format!(": {}", invalid_values.join(", "))
                };
                format!(
                    "Column {column} has {invalid_count} values outside its {allowed_count} permitted values{values_str}"
                )
            }

            Issue::OutOfRange {
                column,
                invalid_count,
                min,
                max,
                samples,
            } => format!(
                "Column {column} has {invalid_count} values outside [{min}, {max}]{}",
                sample_suffix(samples)
            ),

            Issue::UnknownCombination { row_count, samples } => {
                let sample_str = if samples.is_empty() {
                    String::new()
                } else {
                    let listed: Vec<String> = samples.iter().map(|c| format!("({c})")).collect();
                    format!(" (e.g., {})", listed.join(", "))
                };
                format!("{row_count} rows have a combination missing from the catalog{sample_str}")
            }
        }
    }
}

fn sample_suffix(samples: &[String]) -> String {
    if samples.is_empty() {
        String::new()
    } else {
        format!(" (e.g., {})", samples.join(", "))
    }
}
