//! Service layer for Cashly
//!
//! The stores add validation, persistence and change history on top of the storage
//! repositories. They are the only writers of ledger and budget state.

pub mod budget;
pub mod entry;

pub use budget::BudgetStore;
pub use entry::{EntryListing, EntryStore};
