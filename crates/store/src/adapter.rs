//! The key-value persistence boundary.
//!
//! Collections are stored whole: one JSON-serialized array per key. The
//! adapter contract mirrors origin-scoped web storage: synchronous get,
//! set, and remove over string keys and values.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;

/// Synchronous key -> string storage.
pub trait StoreAdapter {
    /// Read a value. Absent keys (and unreadable values) are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any prior one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Removing an absent key is fine.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Volatile store backed by a `HashMap`. Used in tests and anywhere
/// persistence across runs is not needed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreAdapter for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Store keeping one `<key>.json` file per key under a base directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Write {
            key: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Keys become file names under the base directory. Anything that could
/// resolve outside it (separators, parent components) is rejected; user
/// ids flow into keys, so this cannot be left to the caller.
fn key_is_file_safe(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\']) && !key.contains("..")
}

impl StoreAdapter for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        if !key_is_file_safe(key) {
            tracing::warn!(key, "Treating path-unsafe key as absent");
            return None;
        }
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                // Unreadable values behave as absent; the caller's
                // fail-soft read contract takes over.
                tracing::warn!(key, error = %e, "Treating unreadable value as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !key_is_file_safe(key) {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "key is not a valid file name".to_string(),
            });
        }
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !key_is_file_safe(key) {
            return Err(StoreError::Remove {
                key: key.to_string(),
                reason: "key is not a valid file name".to_string(),
            });
        }
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
