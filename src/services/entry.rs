//! Entry store
//!
//! Validates new entries, keeps the ledger newest-first, persists the full
//! ledger on every mutation and records each change in the history journal.
//! A mutation that fails to persist leaves the ledger as it was.

use tracing::info;

use crate::error::{CashlyError, CashlyResult};
use crate::history::LedgerEvent;
use crate::models::{Entry, EntryDraft, EntryFilter, EntryId};
use crate::storage::Storage;

/// Service owning the ledger
pub struct EntryStore<'a> {
    storage: &'a Storage,
}

impl<'a> EntryStore<'a> {
    /// Create a new entry store
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft and add it to the front of the ledger
    ///
    /// Nothing changes if validation or persistence fails.
    pub fn add(&self, draft: EntryDraft) -> CashlyResult<Entry> {
        let entry = draft
            .into_entry()
            .map_err(|e| CashlyError::Validation(e.to_string()))?;

        self.storage.entries.prepend(entry.clone())?;

        info!(id = %entry.id, kind = entry.entry_type.as_str(), "entry added");
        self.storage.record(LedgerEvent::EntryAdded {
            entry: entry.clone(),
        });

        Ok(entry)
    }

    /// Remove an entry by id; absent ids are a no-op
    ///
    /// Returns the removed entry, if there was one.
    pub fn remove(&self, id: EntryId) -> CashlyResult<Option<Entry>> {
        let removed = self.storage.entries.delete(id)?;

        if let Some(entry) = &removed {
            info!(id = %entry.id, "entry removed");
            self.storage.record(LedgerEvent::EntryRemoved {
                entry: entry.clone(),
            });
        }

        Ok(removed)
    }

    /// Empty the ledger, returning how many entries were removed
    pub fn clear(&self) -> CashlyResult<usize> {
        let removed = self.storage.entries.clear()?;

        if !removed.is_empty() {
            info!(count = removed.len(), "ledger cleared");
            self.storage.record(LedgerEvent::cleared(&removed));
        }

        Ok(removed.len())
    }

    /// List entries matching `filter`, in ledger order
    pub fn list(&self, filter: EntryFilter) -> CashlyResult<EntryListing> {
        Ok(EntryListing {
            entries: self.storage.entries.get_all()?,
            filter,
        })
    }

    /// Resolve a full UUID or a short displayed id (`ent-1a2b3c4d`) to an id
    ///
    /// A prefix matching several entries is rejected.
    pub fn resolve_id(&self, identifier: &str) -> CashlyResult<Option<EntryId>> {
        if let Ok(id) = identifier.trim().parse::<EntryId>() {
            return Ok(Some(id));
        }

        let all = self.storage.entries.get_all()?;
        let mut matches = all.iter().filter(|e| e.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (None, _) => Ok(None),
            (Some(entry), None) => Ok(Some(entry.id)),
            (Some(_), Some(_)) => Err(CashlyError::validation(format!(
                "'{}' matches more than one entry; use more characters",
                identifier.trim()
            ))),
        }
    }

    /// Number of entries in the ledger
    pub fn count(&self) -> CashlyResult<usize> {
        self.storage.entries.count()
    }
}

/// A filtered view over a snapshot of the ledger
///
/// Filtering happens lazily on each iteration, so the listing can be walked
/// any number of times.
#[derive(Debug, Clone)]
pub struct EntryListing {
    entries: Vec<Entry>,
    filter: EntryFilter,
}

impl EntryListing {
    /// Iterate over the matching entries
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| self.filter.matches(e))
    }

    /// The filter this listing applies
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    /// Whether no entry matches
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect the matching entries
    pub fn to_vec(&self) -> Vec<Entry> {
        self.iter().cloned().collect()
    }
}

impl<'l> IntoIterator for &'l EntryListing {
    type Item = &'l Entry;
    type IntoIter = Box<dyn Iterator<Item = &'l Entry> + 'l>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
