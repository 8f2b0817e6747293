//! Default file locations.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the project root.
pub const PROJECT_ROOT_ENV_VAR: &str = "RXSCORE_PROJECT_ROOT";

/// Shared configuration document, relative to the project root.
pub const PARAMS_FILE: &str = "params.toml";

/// Combination catalog, relative to the project root.
pub const COMBINATIONS_FILE: &str = "data/processed/valid_combinations.json";

/// Raw training data, relative to the project root.
pub const RAW_DATA_FILE: &str = "data/raw/real_drug_dataset.csv";

/// Get the project root directory.
///
/// Resolution order:
/// 1. `RXSCORE_PROJECT_ROOT` environment variable
/// 2. the current working directory
pub fn project_root() -> PathBuf {
    if let Ok(root) = std::env::var(PROJECT_ROOT_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(".")
}

/// Locations of the two schema sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPaths {
    pub params: PathBuf,
    pub combinations: PathBuf,
}

impl SchemaPaths {
    /// Default layout below `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            params: root.join(PARAMS_FILE),
            combinations: root.join(COMBINATIONS_FILE),
        }
    }

    /// Default layout below [`project_root`], with optional per-file overrides.
    pub fn resolve(params: Option<PathBuf>, combinations: Option<PathBuf>) -> Self {
        let defaults = Self::under(&project_root());
        Self {
            params: params.unwrap_or(defaults.params),
            combinations: combinations.unwrap_or(defaults.combinations),
        }
    }
}

/// Raw training data below [`project_root`].
pub fn raw_data_path() -> PathBuf {
    project_root().join(RAW_DATA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_root() {
        let paths = SchemaPaths::under(Path::new("/srv/model"));
        assert_eq!(paths.params, PathBuf::from("/srv/model/params.toml"));
        assert_eq!(
            paths.combinations,
            PathBuf::from("/srv/model/data/processed/valid_combinations.json")
        );
    }

    #[test]
    fn explicit_paths_win() {
        let paths = SchemaPaths::resolve(
            Some(PathBuf::from("a.toml")),
            Some(PathBuf::from("b.json")),
        );
        assert_eq!(paths.params, PathBuf::from("a.toml"));
        assert_eq!(paths.combinations, PathBuf::from("b.json"));
    }
}
