//! Session key/value persistence
//!
//! - `Storage` trait (get/set/remove keyed by string)
//! - In-memory backend
//! - JSON file backend

mod file_system;
mod memory;

pub use file_system::FileStorage;
pub use memory::MemoryStorage;

use crate::config::SessionConfig;
use crate::error::StorageError;
use std::sync::Arc;

/// String-keyed persistent store
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Pick the backend once for a session: file-backed when `session_file` is
/// configured, otherwise in-memory.
pub fn resolve_storage(config: &SessionConfig) -> Arc<dyn Storage> {
    match &config.session_file {
        Some(path) => {
            log::debug!("Using file session storage at {}", path.display());
            Arc::new(FileStorage::new(path.clone()))
        }
        None => {
            log::debug!("Using in-memory session storage");
            Arc::new(MemoryStorage::new())
        }
    }
}
