use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::Storage;
use crate::error::StorageError;

/// Session store persisted as a single JSON object on disk
///
/// Every mutation rewrites the whole file. A missing file reads as empty.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    guard: Mutex<()>,
}

impl FileStorage {
    /// Create a file store at `path` (the file is created on first write)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let items = serde_json::from_str(&contents)?;
        Ok(items)
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self
            .guard
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        let mut items = self.load()?;
        if f(&mut items) {
            self.save(&items)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self
            .guard
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        log::debug!("Persisting session key '{}' to {:?}", key, self.path);
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| items.remove(key).is_some())
    }
}
