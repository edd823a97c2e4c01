//! Entry CLI commands
//!
//! Add, list, remove and clear ledger entries.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_line, format_entry_table};
use crate::error::{CashlyError, CashlyResult};
use crate::models::{EntryDraft, EntryFilter, EntryType, DATE_FORMAT};
use crate::services::EntryStore;
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record an income or expense
    Add {
        /// Entry type: income or expense
        entry_type: String,
        /// Amount (e.g., "45.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was for
        description: String,
        /// Category label (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Only show this type ("income", "expense" or "all")
        #[arg(short = 't', long = "type")]
        entry_type: Option<String>,
        /// Only show this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove an entry by ID or unique ID prefix
    #[command(alias = "rm")]
    Remove {
        /// Entry ID
        id: String,
    },

    /// Remove every entry
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse a filter from the `--type` / `--category` options
pub fn parse_filter(
    entry_type: Option<&str>,
    category: Option<&str>,
) -> CashlyResult<EntryFilter> {
    EntryFilter::from_text(entry_type, category).map_err(|e| CashlyError::Validation(e.to_string()))
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> CashlyResult<()> {
    let store = EntryStore::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            entry_type,
            amount,
            description,
            category,
            date,
        } => {
            let entry_type = entry_type
                .parse::<EntryType>()
                .map_err(|e| CashlyError::Validation(e.to_string()))?;
            // Unparseable amounts are rejected by draft validation
            let amount = amount.trim().parse::<f64>().unwrap_or(f64::NAN);
            let category = category.unwrap_or_else(|| settings.default_category.clone());
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());

            let entry = store.add(EntryDraft::new(
                entry_type,
                description,
                category,
                amount,
                date,
            ))?;

            println!("Added {}", format_entry_line(&entry, symbol));
            if !settings.is_known_category(&entry.category) {
                println!("  Note: '{}' is a new category", entry.category);
            }
        }

        EntryCommands::List {
            entry_type,
            category,
        } => {
            let filter = parse_filter(entry_type.as_deref(), category.as_deref())?;
            let listing = store.list(filter)?;
            print!("{}", format_entry_table(&listing, symbol));
        }

        EntryCommands::Remove { id } => {
            let removed = match store.resolve_id(&id)? {
                Some(entry_id) => store.remove(entry_id)?,
                None => None,
            };

            match removed {
                Some(entry) => println!("Removed {}", format_entry_line(&entry, symbol)),
                None => println!("No entry matches '{}'; nothing removed", id),
            }
        }

        EntryCommands::Clear { force } => {
            let count = store.count()?;
            if count == 0 {
                println!("The ledger is already empty");
                return Ok(());
            }

            if !force {
                println!("About to remove all {} entries.", count);
                println!();
                println!("Use --force to confirm");
                return Ok(());
            }

            let removed = store.clear()?;
            println!("Removed {} entries", removed);
        }
    }

    Ok(())
}
