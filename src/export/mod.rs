//! Export module for Cashly
//!
//! CSV export of the ledger. The printable report lives in `display::report`.

pub mod csv;

pub use self::csv::{export_entries_csv, to_csv, CSV_HEADERS};
