//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod entry;
pub mod export;
pub mod history;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::handle_export;
pub use history::{handle_categories, handle_history};
pub use report::{handle_chart, handle_report, handle_summary};
