//! Key-value persistence backends
//!
//! The ledger and the budget each live under one string key. Values are
//! opaque text; decoding them is the repositories' job.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CashlyError, CashlyResult};

use super::file_io::{read_text, write_text_atomic};

/// A synchronous string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value under `key`, `None` if it was never set
    fn get(&self, key: &str) -> CashlyResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> CashlyResult<()>;
}

/// Stores each key as a file in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CashlyResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> CashlyResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// Volatile store, for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CashlyResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CashlyResult<()> {
        let mut data = self.data.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("cashly_budget").unwrap(), None);
        store.set("cashly_budget", "1500.00").unwrap();

        assert!(temp_dir.path().join("cashly_budget").exists());

        let reopened = FileStore::new(temp_dir.path().to_path_buf());
        assert_eq!(
            reopened.get("cashly_budget").unwrap().as_deref(),
            Some("1500.00")
        );
    }
}
