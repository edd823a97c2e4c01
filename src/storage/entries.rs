//! Entry repository for key-value storage
//!
//! Holds the ledger in memory (newest first) and persists it as a JSON array
//! under a single key.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::{CashlyError, CorruptDataError};
use crate::models::{Entry, EntryId};

use super::kv::KeyValueStore;

/// Repository for ledger persistence
pub struct EntryRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    data: RwLock<Vec<Entry>>,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the ledger, degrading to empty when the stored value is unusable
    pub fn load(&self) -> Result<(), CashlyError> {
        let loaded = match self.store.get(&self.key)? {
            None => Vec::new(),
            Some(raw) => deserialize_entries(&self.key, &raw).unwrap_or_else(|e| {
                warn!(error = %e, "discarding unreadable ledger");
                Vec::new()
            }),
        };

        let mut data = self.data.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        debug!(count = loaded.len(), "ledger loaded");
        *data = loaded;

        Ok(())
    }

    /// Get all entries in ledger order
    pub fn get_all(&self) -> Result<Vec<Entry>, CashlyError> {
        let data = self.data.read().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Insert an entry at the front of the ledger and persist
    pub fn prepend(&self, entry: Entry) -> Result<(), CashlyError> {
        let mut data = self.data.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|e| e.id == entry.id) {
            return Err(CashlyError::Storage(format!(
                "Entry {} already exists",
                entry.id
            )));
        }

        let mut candidate = Vec::with_capacity(data.len() + 1);
        candidate.push(entry);
        candidate.extend(data.iter().cloned());

        self.commit(&mut data, candidate)
    }

    /// Delete an entry and persist, returning it if it was present
    ///
    /// An absent id leaves the ledger and the store untouched.
    pub fn delete(&self, id: EntryId) -> Result<Option<Entry>, CashlyError> {
        let mut data = self.data.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let index = match data.iter().position(|e| e.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let mut candidate = data.clone();
        let removed = candidate.remove(index);
        self.commit(&mut data, candidate)?;

        Ok(Some(removed))
    }

    /// Remove every entry and persist, returning the removed entries
    pub fn clear(&self) -> Result<Vec<Entry>, CashlyError> {
        let mut data = self.data.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = data.clone();
        self.commit(&mut data, Vec::new())?;

        Ok(removed)
    }

    // The store is written before memory changes, so a failed write leaves
    // both sides as they were.
    fn commit(&self, data: &mut Vec<Entry>, candidate: Vec<Entry>) -> Result<(), CashlyError> {
        let json = serde_json::to_string(&candidate)
            .map_err(|e| CashlyError::Storage(format!("Failed to serialize ledger: {}", e)))?;
        self.store.set(&self.key, &json)?;
        debug!(count = candidate.len(), "ledger saved");

        *data = candidate;
        Ok(())
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, CashlyError> {
        let data = self.data.read().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

/// Decode a persisted ledger
///
/// Anything other than a JSON array is corrupt. Array elements that are not
/// valid entries, or repeat an earlier id, are skipped.
pub fn deserialize_entries(key: &str, raw: &str) -> Result<Vec<Entry>, CorruptDataError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| CorruptDataError::new(key, e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(CorruptDataError::new(
                key,
                format!("expected an array, found {}", json_kind(&other)),
            ))
        }
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let entry: Entry = match serde_json::from_value(item) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(index, error = %e, "skipping malformed stored entry");
                continue;
            }
        };
        if let Err(e) = entry.validate() {
            warn!(index, error = %e, "skipping invalid stored entry");
            continue;
        }
        if !seen.insert(entry.id) {
            warn!(index, id = %entry.id, "skipping duplicate stored entry");
            continue;
        }
        entries.push(entry);
    }

    Ok(entries)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
