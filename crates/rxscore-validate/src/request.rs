//! Two-phase request validation.
//!
//! Phase one checks every field on its own and collects all violations.
//! Phase two checks the `(Condition, Drug_Name, Dosage_mg, Side_Effects)`
//! tuple against the catalog and only runs when phase one found nothing.

use tracing::debug;

use rxscore_model::{Combination, Dosage, Field, PredictionRequest};
use rxscore_schema::SchemaRegistry;

use crate::record::ValidatedRecord;
use crate::violation::{Rejection, Violation};

/// Validate a request against a registry snapshot.
pub fn validate(
    request: &PredictionRequest,
    registry: &SchemaRegistry,
) -> Result<ValidatedRecord, Rejection> {
    let mut violations = Vec::new();

    check_range(registry, Field::Age, request.age, &mut violations);
    check_domain(registry, Field::Gender, &request.gender, &mut violations);
    check_domain(registry, Field::Condition, &request.condition, &mut violations);
    check_domain(registry, Field::DrugName, &request.drug_name, &mut violations);
    let dosage = check_dosage(registry, request.dosage_mg, &mut violations);
    check_range(
        registry,
        Field::TreatmentDurationDays,
        request.treatment_duration_days,
        &mut violations,
    );
    check_domain(
        registry,
        Field::SideEffects,
        &request.side_effects,
        &mut violations,
    );

    let dosage = match dosage {
        Some(dosage) if violations.is_empty() => dosage,
        _ => {
            debug!(
                violations = violations.len(),
                "request rejected by field checks"
            );
            return Err(Rejection::field_level(violations));
        }
    };

    if !registry.is_combination_valid(
        &request.condition,
        &request.drug_name,
        dosage,
        &request.side_effects,
    ) {
        debug!("request rejected by combination check");
        return Err(Rejection::combination(Combination::new(
            request.condition.as_str(),
            request.drug_name.as_str(),
            dosage,
            request.side_effects.as_str(),
        )));
    }

    Ok(ValidatedRecord::new(request, dosage))
}

fn check_range(
    registry: &SchemaRegistry,
    field: Field,
    value: i64,
    violations: &mut Vec<Violation>,
) {
    let Some(bounds) = registry.range_for(field) else {
        return;
    };
    if !bounds.contains(value) {
        violations.push(Violation::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
}

fn check_domain(
    registry: &SchemaRegistry,
    field: Field,
    value: &str,
    violations: &mut Vec<Violation>,
) {
    let domain = registry.domain_for(field);
    if !domain.contains(value) {
        violations.push(Violation::NotInDomain {
            field,
            value: value.to_string(),
            allowed: domain.values().to_vec(),
        });
    }
}

/// Returns the dosage when it is a member of the dosage domain.
fn check_dosage(
    registry: &SchemaRegistry,
    value: f64,
    violations: &mut Vec<Violation>,
) -> Option<Dosage> {
    let domain = registry.dosage_domain();
    match Dosage::new(value) {
        Ok(dosage) if domain.contains(&dosage) => Some(dosage),
        _ => {
            violations.push(Violation::DosageNotInDomain {
                value,
                allowed: domain.values().iter().map(|d| d.value()).collect(),
            });
            None
        }
    }
}
