//! Storage layer for Cashly
//!
//! Two independent keys in a key-value store hold all state: the ledger (a
//! JSON array of entries) and the monthly budget (a numeric string). Writes
//! through the file-backed store are atomic, and a repository only changes
//! its in-memory state once the write has succeeded.

pub mod budget;
pub mod entries;
pub mod file_io;
pub mod kv;

pub use budget::BudgetRepository;
pub use entries::EntryRepository;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use tracing::warn;

use crate::config::paths::CashlyPaths;
use crate::error::CashlyError;
use crate::history::{HistoryJournal, HistoryRecord, LedgerEvent};

/// Key holding the ledger
pub const ENTRIES_KEY: &str = "cashly_entries";

/// Key holding the monthly budget
pub const BUDGET_KEY: &str = "cashly_budget";

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub entries: EntryRepository,
    pub budget: BudgetRepository,
    journal: Option<HistoryJournal>,
}

impl Storage {
    /// Open file-backed storage under the configured data directory
    pub fn new(paths: &CashlyPaths) -> Result<Self, CashlyError> {
        paths.ensure_directories()?;

        let store = Arc::new(FileStore::new(paths.data_dir()));
        let mut storage = Self::with_store(store);
        storage.journal = Some(HistoryJournal::new(paths.history_file()));
        Ok(storage)
    }

    /// Storage over any key-value backend, without a history journal
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            entries: EntryRepository::new(store.clone(), ENTRIES_KEY),
            budget: BudgetRepository::new(store, BUDGET_KEY),
            journal: None,
        }
    }

    /// Volatile storage, used by tests
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Load all data from the store
    pub fn load_all(&mut self) -> Result<(), CashlyError> {
        self.entries.load()?;
        self.budget.load()?;
        Ok(())
    }

    /// The history journal, if this storage keeps one
    pub fn journal(&self) -> Option<&HistoryJournal> {
        self.journal.as_ref()
    }

    /// Append an event to the history journal
    ///
    /// The change it describes is already persisted, so a journal failure is
    /// only logged.
    pub fn record(&self, event: LedgerEvent) {
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.append(&HistoryRecord::now(event)) {
                warn!(error = %e, path = %journal.path().display(), "history not recorded");
            }
        }
    }
}
