//! User preferences file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{write_json, StorageResult};

pub const DEFAULT_DATA_FILE: &str = "data/docit.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings read from `preferences.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    /// Where patient and appointment records are kept.
    pub data_file: PathBuf,
    /// `env_logger` filter used when neither the flag nor `RUST_LOG` is set.
    pub log_level: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl UserPrefs {
    /// Read prefs from `path`; a missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        match fs::read_to_string(path.as_ref()) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> StorageResult<()> {
        write_json(path.as_ref(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_prefs_are_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = UserPrefs::load(dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn test_partial_prefs_fill_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"log_level":"debug"}"#).unwrap();
        let prefs = UserPrefs::load(&path).unwrap();
        assert_eq!(prefs.log_level, "debug");
        assert_eq!(prefs.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_prefs_survive_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config/preferences.json");
        let prefs = UserPrefs {
            data_file: PathBuf::from("/tmp/clinic.json"),
            log_level: "warn".to_string(),
        };
        prefs.save(&path).unwrap();
        assert_eq!(UserPrefs::load(&path).unwrap(), prefs);
    }
}
