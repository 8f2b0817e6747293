//! Shared schema configuration document.
//!
//! The same document drives the training pipeline and the inference path. Only
//! the top-level `schema` table is read here; other tables belong to the
//! training pipeline and are ignored.
//!
//! ```toml
//! [schema]
//! columns = ["Patient_ID", "Age", "Gender", "Condition", "Drug_Name",
//!            "Dosage_mg", "Treatment_Duration_days", "Side_Effects",
//!            "Improvement_Score"]
//! gender_values = ["Female", "Male"]
//! condition_values = ["Diabetes", "Hypertension"]
//! drug_values = ["Metformin", "Lisinopril"]
//! side_effect_values = ["Nausea", "Dizziness"]
//! dosage_values = [5, 10, 50, 500]
//! age_range = [18, 79]
//! duration_range = [5, 59]
//! score_range = [0, 10]
//! ```
//!
//! Documents ending in `.json` are parsed as JSON with the same structure.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rxscore_model::{Dosage, SCORE_MAX, SCORE_MIN};

use crate::error::{Result, SchemaError};

pub const DEFAULT_AGE_RANGE: Bounds<i64> = Bounds { min: 0, max: 100 };
pub const DEFAULT_DURATION_RANGE: Bounds<i64> = Bounds { min: 1, max: 365 };
pub const DEFAULT_SCORE_RANGE: Bounds<f64> = Bounds {
    min: SCORE_MIN,
    max: SCORE_MAX,
};

/// Inclusive `[min, max]` bound, written as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "(T, T)",
    into = "(T, T)",
    bound(
        serialize = "T: Serialize + Copy",
        deserialize = "T: Deserialize<'de> + Copy"
    )
)]
pub struct Bounds<T: Copy> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl<T: Copy> From<(T, T)> for Bounds<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> From<Bounds<T>> for (T, T) {
    fn from(bounds: Bounds<T>) -> Self {
        (bounds.min, bounds.max)
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The `schema` table of the shared configuration document.
///
/// Every key is optional; missing lists are empty and missing ranges take the
/// documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub columns: Vec<String>,
    pub gender_values: Vec<String>,
    pub condition_values: Vec<String>,
    pub drug_values: Vec<String>,
    pub side_effect_values: Vec<String>,
    pub dosage_values: Vec<Dosage>,
    pub age_range: Bounds<i64>,
    pub duration_range: Bounds<i64>,
    pub score_range: Bounds<f64>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            gender_values: Vec::new(),
            condition_values: Vec::new(),
            drug_values: Vec::new(),
            side_effect_values: Vec::new(),
            dosage_values: Vec::new(),
            age_range: DEFAULT_AGE_RANGE,
            duration_range: DEFAULT_DURATION_RANGE,
            score_range: DEFAULT_SCORE_RANGE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    schema: SchemaConfig,
}

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension (`.json` is JSON, anything else TOML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl SchemaConfig {
    /// Read and parse the `schema` table of a configuration document.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SchemaError::ConfigMissing {
                    path: path.to_path_buf(),
                }
            } else {
                SchemaError::io(path, source)
            }
        })?;
        Self::parse(&content, ConfigFormat::from_path(path)).map_err(|message| {
            SchemaError::ConfigMalformed {
                path: path.to_path_buf(),
                message,
            }
        })
    }

    /// Parse a document from text. Errors are returned as plain messages so
    /// callers can attach the source location.
    pub fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        let document: SchemaDocument = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        };
        document.schema.check_ranges()?;
        Ok(document.schema)
    }

    /// Render as a configuration document with a top-level `schema` table.
    pub fn to_document_string(&self, format: ConfigFormat) -> Result<String> {
        let document = SchemaDocument {
            schema: self.clone(),
        };
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(&document).map_err(|e| SchemaError::Serialize {
                    what: "schema configuration",
                    message: e.to_string(),
                })
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(&document).map_err(|e| SchemaError::Serialize {
                    what: "schema configuration",
                    message: e.to_string(),
                })
            }
        }
    }

    /// Write the configuration as a document, choosing the format by extension.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let content = self.to_document_string(ConfigFormat::from_path(path))?;
        crate::fs::write_atomic(path, content.as_bytes())
    }

    /// Replace the `schema` table of the document at `path`, keeping every
    /// other table. Writes a fresh document when the file does not exist.
    pub fn update_document(&self, path: &Path) -> Result<()> {
        let existing = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return self.write_to_path(path),
            Err(e) => return Err(SchemaError::io(path, e)),
        };
        let malformed = |message: String| SchemaError::ConfigMalformed {
            path: path.to_path_buf(),
            message,
        };
        let serialize = |message: String| SchemaError::Serialize {
            what: "schema configuration",
            message,
        };

        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => {
                let mut document: toml::Table =
                    toml::from_str(&existing).map_err(|e| malformed(e.to_string()))?;
                let schema = toml::Value::try_from(self).map_err(|e| serialize(e.to_string()))?;
                document.insert("schema".to_string(), schema);
                toml::to_string_pretty(&document).map_err(|e| serialize(e.to_string()))?
            }
            ConfigFormat::Json => {
                let mut document: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(&existing).map_err(|e| malformed(e.to_string()))?;
                let schema = serde_json::to_value(self).map_err(|e| serialize(e.to_string()))?;
                document.insert("schema".to_string(), schema);
                serde_json::to_string_pretty(&document).map_err(|e| serialize(e.to_string()))?
            }
        };
        crate::fs::write_atomic(path, content.as_bytes())
    }

    fn check_ranges(&self) -> std::result::Result<(), String> {
        let ranges = [
            ("age_range", self.age_range.is_ordered()),
            ("duration_range", self.duration_range.is_ordered()),
            ("score_range", self.score_range.is_ordered()),
        ];
        for (name, ordered) in ranges {
            if !ordered {
                return Err(format!("{name} minimum exceeds maximum"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = SchemaConfig::parse("[schema]\ngender_values = [\"Female\"]\n", ConfigFormat::Toml)
            .unwrap();
        assert_eq!(config.gender_values, vec!["Female"]);
        assert!(config.drug_values.is_empty());
        assert_eq!(config.age_range, DEFAULT_AGE_RANGE);
        assert_eq!(config.duration_range, DEFAULT_DURATION_RANGE);
    }

    #[test]
    fn document_without_schema_table_is_empty() {
        let config = SchemaConfig::parse("random_seed = 42\n", ConfigFormat::Toml).unwrap();
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn integer_dosages_parse_as_dosage() {
        let config =
            SchemaConfig::parse("[schema]\ndosage_values = [5, 10.0, 500]\n", ConfigFormat::Toml)
                .unwrap();
        let values: Vec<f64> = config.dosage_values.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![5.0, 10.0, 500.0]);
    }

    #[test]
    fn inverted_range_is_malformed() {
        let err = SchemaConfig::parse("[schema]\nage_range = [80, 18]\n", ConfigFormat::Toml)
            .unwrap_err();
        assert!(err.contains("age_range"));
    }

    #[test]
    fn range_must_have_two_elements() {
        assert!(SchemaConfig::parse("[schema]\nage_range = [18]\n", ConfigFormat::Toml).is_err());
    }

    #[test]
    fn json_documents_use_same_shape() {
        let json = r#"{"schema": {"drug_values": ["Metformin"], "duration_range": [5, 59]}}"#;
        let config = SchemaConfig::parse(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.drug_values, vec!["Metformin"]);
        assert_eq!(config.duration_range, Bounds { min: 5, max: 59 });
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("params.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("params.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("params")), ConfigFormat::Toml);
    }

    #[test]
    fn update_keeps_other_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(
            &path,
            "random_seed = 42\n\n[features]\ntarget = \"Improvement_Score\"\n\n[schema]\ngender_values = [\"Other\"]\n",
        )
        .unwrap();

        let config = SchemaConfig {
            gender_values: vec!["Female".into(), "Male".into()],
            ..SchemaConfig::default()
        };
        config.update_document(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("random_seed = 42"));
        assert!(text.contains("[features]"));
        assert_eq!(SchemaConfig::from_path(&path).unwrap(), config);
    }

    #[test]
    fn update_creates_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        SchemaConfig::default().update_document(&path).unwrap();
        assert_eq!(SchemaConfig::from_path(&path).unwrap(), SchemaConfig::default());
    }

    #[test]
    fn toml_document_round_trips() {
        let config = SchemaConfig {
            gender_values: vec!["Female".into(), "Male".into()],
            dosage_values: vec![Dosage::new(500.0).unwrap()],
            age_range: Bounds { min: 18, max: 79 },
            ..SchemaConfig::default()
        };
        let text = config.to_document_string(ConfigFormat::Toml).unwrap();
        assert!(text.contains("[schema]"));
        let parsed = SchemaConfig::parse(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }
}
