//! Change history
//!
//! Every entry added or removed, ledger clear and budget change is appended to
//! a JSON-lines journal next to the data directory. `cashly history` reads it
//! back.

mod event;
mod journal;

pub use event::{HistoryRecord, LedgerEvent};
pub use journal::HistoryJournal;
