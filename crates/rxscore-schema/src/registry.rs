#![deny(unsafe_code)]

//! The schema registry: one consistent view of what a valid record is.
//!
//! A registry is built once from the shared configuration document and the
//! combination catalog and is immutable afterwards. Share it by reference or
//! `Arc`; replacing it means building a new registry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use rxscore_model::{Dosage, Field, FieldKind};

use crate::catalog::CombinationCatalog;
use crate::config::{Bounds, SchemaConfig};
use crate::domain::Domain;
use crate::error::{Result, SchemaError};
use crate::hash::sha256_hex;

static EMPTY_DOMAIN: Domain<String> = Domain::empty();

/// How one schema source was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Parsed from the given file.
    Loaded { path: PathBuf },
    /// File absent; defaults used.
    Missing { path: PathBuf },
    /// File unreadable or unparsable; defaults used.
    Malformed { path: PathBuf, message: String },
    /// Supplied directly by the caller.
    Provided,
}

impl SourceStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Malformed { .. })
    }

    fn from_error(error: &SchemaError, path: &Path) -> Self {
        match error {
            SchemaError::ConfigMissing { .. } | SchemaError::CatalogMissing { .. } => {
                Self::Missing {
                    path: path.to_path_buf(),
                }
            }
            other => Self::Malformed {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        }
    }
}

/// Outcome of loading both schema sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub config: SourceStatus,
    pub catalog: SourceStatus,
}

impl LoadReport {
    pub fn is_degraded(&self) -> bool {
        self.config.is_degraded() || self.catalog.is_degraded()
    }
}

#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    config: SchemaConfig,
    domains: BTreeMap<Field, Domain<String>>,
    dosages: Domain<Dosage>,
    catalog: CombinationCatalog,
    fingerprint: String,
    report: LoadReport,
}

impl SchemaRegistry {
    /// Build a registry from already-loaded parts.
    pub fn from_parts(config: SchemaConfig, catalog: CombinationCatalog) -> Self {
        Self::build(
            config,
            catalog,
            LoadReport {
                config: SourceStatus::Provided,
                catalog: SourceStatus::Provided,
            },
        )
    }

    /// Load both sources, degrading instead of failing.
    ///
    /// A missing or malformed configuration yields empty domains and default
    /// ranges; a missing or malformed catalog yields an empty catalog, which
    /// disables combination enforcement. Each fallback is logged and recorded
    /// in [`SchemaRegistry::load_report`].
    pub fn load(config_path: &Path, catalog_path: &Path) -> Self {
        let (config, config_status) = match SchemaConfig::from_path(config_path) {
            Ok(config) => (
                config,
                SourceStatus::Loaded {
                    path: config_path.to_path_buf(),
                },
            ),
            Err(error) => {
                warn!(
                    path = %config_path.display(),
                    %error,
                    "schema configuration unavailable; using empty domains and default ranges"
                );
                (
                    SchemaConfig::default(),
                    SourceStatus::from_error(&error, config_path),
                )
            }
        };

        let (catalog, catalog_status) = match CombinationCatalog::from_path(catalog_path) {
            Ok(catalog) => (
                catalog,
                SourceStatus::Loaded {
                    path: catalog_path.to_path_buf(),
                },
            ),
            Err(error) => {
                warn!(
                    path = %catalog_path.display(),
                    %error,
                    "combination catalog unavailable; combination checks disabled"
                );
                (
                    CombinationCatalog::new(),
                    SourceStatus::from_error(&error, catalog_path),
                )
            }
        };

        Self::build(
            config,
            catalog,
            LoadReport {
                config: config_status,
                catalog: catalog_status,
            },
        )
    }

    /// Load both sources, failing on the first missing or malformed one.
    pub fn try_load(config_path: &Path, catalog_path: &Path) -> Result<Self> {
        let config = SchemaConfig::from_path(config_path)?;
        let catalog = CombinationCatalog::from_path(catalog_path)?;
        Ok(Self::build(
            config,
            catalog,
            LoadReport {
                config: SourceStatus::Loaded {
                    path: config_path.to_path_buf(),
                },
                catalog: SourceStatus::Loaded {
                    path: catalog_path.to_path_buf(),
                },
            },
        ))
    }

    fn build(config: SchemaConfig, catalog: CombinationCatalog, report: LoadReport) -> Self {
        let mut domains = BTreeMap::new();
        for field in Field::CATEGORICAL {
            let values = match field {
                Field::Gender => &config.gender_values,
                Field::Condition => &config.condition_values,
                Field::DrugName => &config.drug_values,
                Field::SideEffects => &config.side_effect_values,
                _ => continue,
            };
            domains.insert(field, values.iter().cloned().collect());
        }
        let dosages = config.dosage_values.iter().copied().collect();
        let fingerprint = fingerprint(&config, &catalog);

        info!(
            fingerprint = %fingerprint,
            genders = config.gender_values.len(),
            conditions = config.condition_values.len(),
            drugs = config.drug_values.len(),
            side_effects = config.side_effect_values.len(),
            dosages = config.dosage_values.len(),
            combinations = catalog.len(),
            degraded = report.is_degraded(),
            "schema registry ready"
        );

        Self {
            config,
            domains,
            dosages,
            catalog,
            fingerprint,
            report,
        }
    }

    /// Permitted values for a categorical field; empty for any other field.
    pub fn domain_for(&self, field: Field) -> &Domain<String> {
        self.domains.get(&field).unwrap_or(&EMPTY_DOMAIN)
    }

    /// Permitted values for a column name; empty for unknown columns.
    pub fn domain_for_column(&self, column: &str) -> &Domain<String> {
        Field::from_column(column).map_or(&EMPTY_DOMAIN, |field| self.domain_for(field))
    }

    /// Inclusive bounds for `Age` and `Treatment_Duration_days`.
    pub fn range_for(&self, field: Field) -> Option<Bounds<i64>> {
        match field {
            Field::Age => Some(self.config.age_range),
            Field::TreatmentDurationDays => Some(self.config.duration_range),
            _ => None,
        }
    }

    /// Inclusive bounds for `Improvement_Score` in training data.
    pub fn score_range(&self) -> Bounds<f64> {
        self.config.score_range
    }

    pub fn dosage_domain(&self) -> &Domain<Dosage> {
        &self.dosages
    }

    /// Expected training-table columns, in order.
    pub fn columns(&self) -> &[String] {
        &self.config.columns
    }

    /// Whether the exact 4-tuple was observed in training data.
    ///
    /// Always true when the catalog is empty: without a catalog the constraint
    /// is not enforced.
    pub fn is_combination_valid(
        &self,
        condition: &str,
        drug_name: &str,
        dosage_mg: Dosage,
        side_effects: &str,
    ) -> bool {
        self.catalog.is_empty()
            || self
                .catalog
                .contains_parts(condition, drug_name, dosage_mg, side_effects)
    }

    pub fn catalog(&self) -> &CombinationCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// SHA-256 over the configuration and catalog contents.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn is_degraded(&self) -> bool {
        self.report.is_degraded()
    }

    /// Whether a field's constraint can accept any value at all.
    pub fn is_constrained(&self, field: Field) -> bool {
        match field.kind() {
            FieldKind::Categorical => !self.domain_for(field).is_empty(),
            FieldKind::Dosage => !self.dosages.is_empty(),
            FieldKind::Range => true,
            FieldKind::Identifier | FieldKind::Target => false,
        }
    }
}

fn fingerprint(config: &SchemaConfig, catalog: &CombinationCatalog) -> String {
    let entries: Vec<_> = catalog.iter().collect();
    // Serializing plain data structures cannot fail.
    let bytes = serde_json::to_vec(&(config, entries)).unwrap_or_default();
    sha256_hex(&bytes)
}
