//! Request-level violations.
//!
//! Each variant carries only the data needed to explain it to a client.

use serde::Serialize;

use rxscore_model::{Combination, Field};

/// Which validation phase rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RejectionKind {
    /// One or more fields outside their domain or range.
    FieldViolation,
    /// Every field valid, but the combination was never observed.
    CombinationViolation,
}

/// A single reason a request was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    // Field checks
    /// Integer field outside its inclusive range.
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Categorical value outside its domain.
    NotInDomain {
        field: Field,
        value: String,
        allowed: Vec<String>,
    },
    /// Dosage not exactly equal to any permitted dosage.
    DosageNotInDomain { value: f64, allowed: Vec<f64> },

    // Combination check
    /// Fields individually valid, tuple absent from the catalog.
    InvalidCombination { combination: Combination },
}

impl Violation {
    /// The offending field, or `None` for a combination violation.
    pub fn field(&self) -> Option<Field> {
        match self {
            Violation::OutOfRange { field, .. } => Some(*field),
            Violation::NotInDomain { field, .. } => Some(*field),
            Violation::DosageNotInDomain { .. } => Some(Field::DosageMg),
            Violation::InvalidCombination { .. } => None,
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            Violation::InvalidCombination { .. } => RejectionKind::CombinationViolation,
            _ => RejectionKind::FieldViolation,
        }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> String {
        match self {
            Violation::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!("Invalid {field}: {value}. Must be between {min} and {max}"),

            Violation::NotInDomain {
                field,
                value,
                allowed,
            } => {
                if allowed.is_empty() {
                    format!("Invalid {field}: '{value}'. No values are configured for {field}")
                } else {
                    format!(
                        "Invalid {field}: '{value}'. Must be one of: {}",
                        allowed.join(", ")
                    )
                }
            }

            Violation::DosageNotInDomain { value, allowed } => {
                if allowed.is_empty() {
                    format!("Invalid Dosage_mg: {value}. No dosages are configured")
                } else {
                    let allowed: Vec<String> = allowed.iter().map(f64::to_string).collect();
                    format!(
                        "Invalid Dosage_mg: {value}. Must be one of: {}",
                        allowed.join(", ")
                    )
                }
            }

            Violation::InvalidCombination { combination } => format!(
                "Invalid combination: {combination}. This combination was not observed \
                 in the clinical records"
            ),
        }
    }
}

/// Why a request was rejected: every violation found, from a single phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub violations: Vec<Violation>,
}

impl Rejection {
    pub(crate) fn field_level(violations: Vec<Violation>) -> Self {
        Self {
            kind: RejectionKind::FieldViolation,
            violations,
        }
    }

    pub(crate) fn combination(combination: Combination) -> Self {
        Self {
            kind: RejectionKind::CombinationViolation,
            violations: vec![Violation::InvalidCombination { combination }],
        }
    }

    pub fn kind(&self) -> RejectionKind {
        self.kind
    }

    /// Offending fields in record order.
    ///
    /// A combination violation names all four key fields together.
    pub fn fields(&self) -> Vec<Field> {
        match self.kind {
            RejectionKind::CombinationViolation => Field::COMBINATION_KEY.to_vec(),
            RejectionKind::FieldViolation => {
                let mut fields: Vec<Field> =
                    self.violations.iter().filter_map(Violation::field).collect();
                fields.sort();
                fields.dedup();
                fields
            }
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;
    use rxscore_model::Dosage;

    #[test]
    fn field_violation_messages() {
        let range = Violation::OutOfRange {
            field: Field::Age,
            value: 15,
            min: 18,
            max: 79,
        };
        insta::assert_snapshot!(range.message(), @"Invalid Age: 15. Must be between 18 and 79");

        let domain = Violation::NotInDomain {
            field: Field::Gender,
            value: "Other".into(),
            allowed: vec!["Female".into(), "Male".into()],
        };
        insta::assert_snapshot!(domain.message(), @"Invalid Gender: 'Other'. Must be one of: Female, Male");
    }

    #[test]
    fn combination_message_names_all_values() {
        let violation = Violation::InvalidCombination {
            combination: Combination::new(
                "Diabetes",
                "Metformin",
                Dosage::new(500.0).unwrap(),
                "Dizziness",
            ),
        };
        insta::assert_snapshot!(
            violation.message(),
            @"Invalid combination: Condition='Diabetes', Drug='Metformin', Dosage=500mg, Side Effects='Dizziness'. This combination was not observed in the clinical records"
        );
        assert_eq!(violation.field(), None);
    }

    #[test]
    fn rejection_serializes_for_clients() {
        let rejection = Rejection::field_level(vec![Violation::DosageNotInDomain {
            value: 10.0,
            allowed: vec![500.0],
        }]);
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["kind"], "FieldViolation");
        assert_eq!(json["violations"][0]["type"], "dosage_not_in_domain");
        assert_eq!(json["violations"][0]["value"], 10.0);
    }
}
