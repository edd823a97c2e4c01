//! Core data models for Cashly
//!
//! Entries, their ids, money amounts and ledger filters.

pub mod entry;
pub mod filter;
pub mod ids;
pub mod money;

pub use entry::{Entry, EntryDraft, EntryType, EntryValidationError, DATE_FORMAT};
pub use filter::EntryFilter;
pub use ids::EntryId;
pub use money::Money;
