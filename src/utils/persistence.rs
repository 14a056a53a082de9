//! Save storage backends.
//!
//! The game only ever stores one serialized record, so a backend is just a
//! string blob that can be written and read back.

use crate::core::constants::SAVE_FILE_NAME;
use crate::error::SaveError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key/value style storage for the serialized save record.
pub trait SaveStore {
    fn save(&mut self, record: &str) -> Result<(), SaveError>;

    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, SaveError>;
}

/// Get the ~/.delve/ directory path, creating it if needed.
pub fn delve_dir() -> Result<PathBuf, SaveError> {
    let home_dir = dirs::home_dir().ok_or(SaveError::NoHomeDir)?;
    let dir = home_dir.join(".delve");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Stores the record as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.delve/save.json`.
    pub fn default_location() -> Result<Self, SaveError> {
        Ok(Self::new(delve_dir()?.join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn save(&mut self, record: &str) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, record)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(&self.path) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, used by tests and embedders without a disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }

    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, record: &str) -> Result<(), SaveError> {
        self.record = Some(record.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, SaveError> {
        Ok(self.record.clone())
    }
}
