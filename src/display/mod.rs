//! Display formatting for terminal output
//!
//! Turns ledger data, summaries and charts into text. Nothing in here
//! touches storage.

pub mod chart;
pub mod entry;
pub mod report;
pub mod summary;

pub use chart::TerminalBarChart;
pub use entry::{format_entry_line, format_entry_table};
pub use report::format_printable_report;
pub use summary::{format_budget_alert, format_budget_line, format_summary, format_summary_with_budget};
