//! Persistence for the record store and user preferences.

mod prefs;

pub use prefs::*;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::{ModelError, RecordStore, Snapshot};

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Illegal values in data file: {0}")]
    IllegalValue(#[from] ModelError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Somewhere a [`Snapshot`] can be read from and written to.
pub trait Storage {
    /// Read the stored snapshot. `None` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<Snapshot>>;

    /// Overwrite the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> StorageResult<()>;

    /// Load a ready-to-use store; empty when nothing has been saved yet.
    fn load_store(&self) -> StorageResult<RecordStore> {
        match self.load()? {
            Some(snapshot) => Ok(RecordStore::from_snapshot(snapshot)?),
            None => Ok(RecordStore::new()),
        }
    }
}

/// Snapshot kept as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        write_json(&self.path, snapshot)
    }
}

/// Serialize `value` to `path` as pretty JSON, creating parent directories.
pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
