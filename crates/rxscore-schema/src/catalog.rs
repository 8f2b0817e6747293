//! Combination catalog file.
//!
//! The catalog is a JSON array of objects keyed by the training-table column
//! names:
//!
//! ```json
//! [
//!   { "Condition": "Diabetes", "Drug_Name": "Metformin", "Dosage_mg": 500.0, "Side_Effects": "Nausea" }
//! ]
//! ```
//!
//! Entries are kept in a sorted set, so duplicate entries in a file collapse
//! and the written file is stable for a given set of combinations.

use std::collections::BTreeSet;
use std::path::Path;

use rxscore_model::{Combination, Dosage};

use crate::error::{Result, SchemaError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationCatalog {
    entries: BTreeSet<Combination>,
}

impl CombinationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SchemaError::CatalogMissing {
                    path: path.to_path_buf(),
                }
            } else {
                SchemaError::io(path, source)
            }
        })?;
        Self::from_json(&content).map_err(|e| SchemaError::CatalogMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let entries: Vec<Combination> = serde_json::from_str(content)?;
        Ok(entries.into_iter().collect())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| SchemaError::Serialize {
            what: "combination catalog",
            message: e.to_string(),
        })
    }

    /// Persist the catalog, replacing any previous file atomically.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let mut content = self.to_json()?;
        content.push('\n');
        crate::fs::write_atomic(path, content.as_bytes())
    }

    pub fn insert(&mut self, combination: Combination) -> bool {
        self.entries.insert(combination)
    }

    pub fn contains(&self, combination: &Combination) -> bool {
        self.entries.contains(combination)
    }

    /// Exact membership test on the four key values.
    pub fn contains_parts(
        &self,
        condition: &str,
        drug_name: &str,
        dosage_mg: Dosage,
        side_effects: &str,
    ) -> bool {
        self.entries
            .contains(&Combination::new(condition, drug_name, dosage_mg, side_effects))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Combination> for CombinationCatalog {
    fn from_iter<I: IntoIterator<Item = Combination>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Combination> for CombinationCatalog {
    fn extend<I: IntoIterator<Item = Combination>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(side_effects: &str, dosage: f64) -> Combination {
        Combination::new("Diabetes", "Metformin", Dosage::new(dosage).unwrap(), side_effects)
    }

    #[test]
    fn parses_integer_and_float_dosages() {
        let json = r#"[
            {"Condition": "Diabetes", "Drug_Name": "Metformin", "Dosage_mg": 500, "Side_Effects": "Nausea"},
            {"Condition": "Diabetes", "Drug_Name": "Metformin", "Dosage_mg": 500.0, "Side_Effects": "Nausea"}
        ]"#;
        let catalog = CombinationCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&combo("Nausea", 500.0)));
    }

    #[test]
    fn rejects_records_missing_keys() {
        let json = r#"[{"Condition": "Diabetes", "Drug_Name": "Metformin", "Dosage_mg": 500}]"#;
        assert!(CombinationCatalog::from_json(json).is_err());
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(CombinationCatalog::from_json(r#"{"Condition": "Diabetes"}"#).is_err());
    }

    #[test]
    fn membership_uses_exact_dosage() {
        let catalog: CombinationCatalog = std::iter::once(combo("Nausea", 500.0)).collect();
        let exact = Dosage::new(500.0).unwrap();
        let near = Dosage::new(500.000_001).unwrap();
        assert!(catalog.contains_parts("Diabetes", "Metformin", exact, "Nausea"));
        assert!(!catalog.contains_parts("Diabetes", "Metformin", near, "Nausea"));
        assert!(!catalog.contains_parts("Diabetes", "Metformin", exact, "Dizziness"));
    }

    #[test]
    fn write_then_read_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/processed/valid_combinations.json");
        let catalog: CombinationCatalog =
            [combo("Nausea", 500.0), combo("Dizziness", 850.0)].into_iter().collect();
        catalog.write_to_path(&path).unwrap();
        let loaded = CombinationCatalog::from_path(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = CombinationCatalog::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SchemaError::CatalogMissing { .. }));
    }
}
