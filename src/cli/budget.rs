//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_line;
use crate::error::CashlyResult;
use crate::services::BudgetStore;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Budget amount (e.g., "1500" or "1500.00")
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the monthly budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> CashlyResult<()> {
    let store = BudgetStore::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { value } => {
            let value = value.trim().parse::<f64>().unwrap_or(f64::NAN);
            let budget = store.save(value)?;
            println!(
                "Monthly budget saved: {}",
                budget.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Show => {
            println!("{}", format_budget_line(store.current()?, symbol));
        }
    }

    Ok(())
}
