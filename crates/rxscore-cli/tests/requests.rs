//! Integration tests for request file loading.

use std::fs;

use rxscore_cli::requests::read_requests;
use rxscore_model::{Combination, Dosage};
use rxscore_schema::{Bounds, CombinationCatalog, SchemaConfig, SchemaRegistry};
use rxscore_validate::{RejectionKind, validate};

const REQUEST: &str = r#"{"Patient_ID": "P0001", "Age": 55, "Gender": "Male",
    "Condition": "Diabetes", "Drug_Name": "Metformin", "Dosage_mg": 500,
    "Treatment_Duration_days": 30, "Side_Effects": "Nausea"}"#;

fn registry() -> SchemaRegistry {
    let dose = Dosage::new(500.0).unwrap();
    let config = SchemaConfig {
        gender_values: vec!["Female".into(), "Male".into()],
        condition_values: vec!["Diabetes".into()],
        drug_values: vec!["Metformin".into()],
        side_effect_values: vec!["Nausea".into(), "Dizziness".into()],
        dosage_values: vec![dose],
        age_range: Bounds { min: 18, max: 79 },
        duration_range: Bounds { min: 5, max: 59 },
        ..SchemaConfig::default()
    };
    let catalog: CombinationCatalog = [Combination::new("Diabetes", "Metformin", dose, "Nausea")]
        .into_iter()
        .collect();
    SchemaRegistry::from_parts(config, catalog)
}

#[test]
fn single_json_object_is_one_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, REQUEST).unwrap();

    let requests = read_requests(&path).unwrap();
    assert_eq!(requests.len(), 1);
    assert!(validate(&requests[0], &registry()).is_ok());
}

#[test]
fn json_array_requests_validate_independently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("requests.json");
    let dizzy = REQUEST.replace("\"Nausea\"", "\"Dizziness\"");
    let young = REQUEST.replace("\"Age\": 55", "\"Age\": 15");
    fs::write(&path, format!("[{REQUEST}, {dizzy}, {young}]")).unwrap();

    let requests = read_requests(&path).unwrap();
    let registry = registry();
    let kinds: Vec<Option<RejectionKind>> = requests
        .iter()
        .map(|request| validate(request, &registry).err().map(|r| r.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(RejectionKind::CombinationViolation),
            Some(RejectionKind::FieldViolation),
        ]
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_requests(&dir.path().join("absent.json")).unwrap_err();
    insta::assert_snapshot!(
        format!("{err}").replace(&dir.path().display().to_string(), "<dir>"),
        @"read requests <dir>/absent.json"
    );
}
