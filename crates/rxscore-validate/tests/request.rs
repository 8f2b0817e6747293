use proptest::prelude::*;

use rxscore_model::{Combination, Dosage, Field, PredictionRequest};
use rxscore_schema::{Bounds, CombinationCatalog, SchemaConfig, SchemaRegistry};
use rxscore_validate::{RejectionKind, Violation, validate};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn dose(value: f64) -> Dosage {
    Dosage::new(value).unwrap()
}

fn config() -> SchemaConfig {
    SchemaConfig {
        gender_values: strings(&["Female", "Male"]),
        condition_values: strings(&["Diabetes"]),
        drug_values: strings(&["Metformin"]),
        side_effect_values: strings(&["Nausea", "Dizziness"]),
        dosage_values: vec![dose(500.0)],
        age_range: Bounds { min: 18, max: 79 },
        duration_range: Bounds { min: 5, max: 59 },
        ..SchemaConfig::default()
    }
}

fn catalog() -> CombinationCatalog {
    [Combination::new("Diabetes", "Metformin", dose(500.0), "Nausea")]
        .into_iter()
        .collect()
}

fn registry() -> SchemaRegistry {
    SchemaRegistry::from_parts(config(), catalog())
}

fn request() -> PredictionRequest {
    PredictionRequest {
        patient_id: "P0001".into(),
        age: 55,
        gender: "Male".into(),
        condition: "Diabetes".into(),
        drug_name: "Metformin".into(),
        dosage_mg: 500.0,
        treatment_duration_days: 30,
        side_effects: "Nausea".into(),
    }
}

#[test]
fn valid_request_is_accepted() {
    let record = validate(&request(), &registry()).expect("accepted");
    assert_eq!(record.patient_id(), "P0001");
    assert_eq!(record.dosage_mg(), dose(500.0));
    assert_eq!(
        record.combination(),
        &Combination::new("Diabetes", "Metformin", dose(500.0), "Nausea")
    );
}

#[test]
fn age_below_range_is_a_field_violation() {
    let rejection = validate(
        &PredictionRequest {
            age: 15,
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
    assert_eq!(rejection.fields(), vec![Field::Age]);
    assert_eq!(
        rejection.violations,
        vec![Violation::OutOfRange {
            field: Field::Age,
            value: 15,
            min: 18,
            max: 79
        }]
    );
}

#[test]
fn range_bounds_are_inclusive() {
    let registry = registry();
    for (age, days) in [(18, 5), (79, 59)] {
        let req = PredictionRequest {
            age,
            treatment_duration_days: days,
            ..request()
        };
        assert!(validate(&req, &registry).is_ok());
    }
}

#[test]
fn dosage_outside_domain_is_a_field_violation() {
    let rejection = validate(
        &PredictionRequest {
            dosage_mg: 10.0,
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
    assert_eq!(rejection.fields(), vec![Field::DosageMg]);
}

#[test]
fn dosage_comparison_is_exact() {
    let registry = registry();
    assert!(
        validate(
            &PredictionRequest {
                dosage_mg: 500.5,
                ..request()
            },
            &registry
        )
        .is_err()
    );
    let integral: PredictionRequest = serde_json::from_str(
        r#"{"Patient_ID": "P1", "Age": 55, "Gender": "Male", "Condition": "Diabetes",
            "Drug_Name": "Metformin", "Dosage_mg": 500, "Treatment_Duration_days": 30,
            "Side_Effects": "Nausea"}"#,
    )
    .unwrap();
    assert!(validate(&integral, &registry).is_ok());
}

#[test]
fn unobserved_tuple_is_a_combination_violation() {
    let rejection = validate(
        &PredictionRequest {
            side_effects: "Dizziness".into(),
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::CombinationViolation);
    assert_eq!(rejection.fields(), Field::COMBINATION_KEY.to_vec());
    assert_eq!(rejection.violations.len(), 1);
    assert_eq!(rejection.violations[0].field(), None);
}

#[test]
fn every_field_violation_is_collected() {
    let rejection = validate(
        &PredictionRequest {
            age: 120,
            gender: "Other".into(),
            dosage_mg: 10.0,
            treatment_duration_days: 1,
            side_effects: "Headache".into(),
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
    assert_eq!(
        rejection.fields(),
        vec![
            Field::Age,
            Field::Gender,
            Field::DosageMg,
            Field::TreatmentDurationDays,
            Field::SideEffects,
        ]
    );
    assert_eq!(rejection.messages().len(), 5);
}

#[test]
fn field_violations_win_over_combination() {
    // Condition is outside its domain and the tuple is also unobserved.
    let rejection = validate(
        &PredictionRequest {
            condition: "Asthma".into(),
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
    assert_eq!(rejection.fields(), vec![Field::Condition]);
}

#[test]
fn domain_membership_is_case_sensitive() {
    let rejection = validate(
        &PredictionRequest {
            gender: "male".into(),
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    assert_eq!(rejection.fields(), vec![Field::Gender]);
}

#[test]
fn degraded_registry_rejects_on_empty_domains() {
    let registry = SchemaRegistry::from_parts(SchemaConfig::default(), CombinationCatalog::new());
    let rejection = validate(&request(), &registry).unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
    assert_eq!(
        rejection.fields(),
        vec![
            Field::Gender,
            Field::Condition,
            Field::DrugName,
            Field::DosageMg,
            Field::SideEffects,
        ]
    );
}

#[test]
fn rejection_body_is_serializable() {
    let rejection = validate(
        &PredictionRequest {
            age: 15,
            ..request()
        },
        &registry(),
    )
    .unwrap_err();
    let body = serde_json::to_value(&rejection).unwrap();
    assert_eq!(body["kind"], "FieldViolation");
    assert_eq!(body["violations"][0]["field"], "Age");
    insta::assert_snapshot!(rejection.to_string(), @"Invalid Age: 15. Must be between 18 and 79");
}

fn arb_request() -> impl Strategy<Value = PredictionRequest> {
    (
        prop::sample::select(vec!["Female", "Male"]),
        prop::sample::select(vec!["Nausea", "Dizziness"]),
        18i64..=79,
        5i64..=59,
    )
        .prop_map(|(gender, side_effects, age, days)| PredictionRequest {
            gender: gender.into(),
            side_effects: side_effects.into(),
            age,
            treatment_duration_days: days,
            ..request()
        })
}

proptest! {
    #[test]
    fn empty_catalog_never_rejects_valid_fields(req in arb_request()) {
        let relaxed = SchemaRegistry::from_parts(config(), CombinationCatalog::new());
        prop_assert!(validate(&req, &relaxed).is_ok());
    }

    #[test]
    fn empty_catalog_accepts_whatever_a_full_catalog_accepts(req in arb_request()) {
        let relaxed = SchemaRegistry::from_parts(config(), CombinationCatalog::new());
        if validate(&req, &registry()).is_ok() {
            prop_assert!(validate(&req, &relaxed).is_ok());
        }
    }

    #[test]
    fn out_of_range_age_names_only_age(age in prop_oneof![-100i64..18, 80i64..200]) {
        let req = PredictionRequest { age, ..request() };
        let rejection = validate(&req, &registry()).unwrap_err();
        prop_assert_eq!(rejection.kind(), RejectionKind::FieldViolation);
        prop_assert_eq!(rejection.fields(), vec![Field::Age]);
    }
}
