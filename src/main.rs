use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cashly::cli::{
    handle_budget_command, handle_categories, handle_chart, handle_entry_command, handle_export,
    handle_history, handle_report, handle_summary, BudgetCommands, EntryCommands,
};
use cashly::config::{paths::CashlyPaths, settings::Settings};
use cashly::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CASHLY_LOG";

#[derive(Parser)]
#[command(
    name = "cashly",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "Cashly records income and expenses, tracks them against a monthly \
                  budget, summarizes spending by category and exports the ledger \
                  to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Entry management commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, savings rate and budget status
    Summary {
        /// Only count this type ("income", "expense" or "all")
        #[arg(short = 't', long = "type")]
        entry_type: Option<String>,
        /// Only count this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show expenses by category as a bar chart
    Chart,

    /// Export the ledger to CSV
    Export {
        /// Output file (defaults to the configured export file name)
        output: Option<PathBuf>,
    },

    /// Print a plain-text report of the whole ledger
    Report,

    /// List the configured categories
    Categories,

    /// Show recent changes to the ledger and budget
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashlyPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => handle_entry_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Summary {
            entry_type,
            category,
        }) => handle_summary(
            &storage,
            &settings,
            entry_type.as_deref(),
            category.as_deref(),
        )?,
        Some(Commands::Chart) => handle_chart(&storage, &settings)?,
        Some(Commands::Export { output }) => match handle_export(&storage, &settings, output) {
            Ok(_) => {}
            Err(e) if e.is_notice() => println!("{}", e),
            Err(e) => return Err(e.into()),
        },
        Some(Commands::Report) => handle_report(&storage, &settings)?,
        Some(Commands::Categories) => handle_categories(&settings)?,
        Some(Commands::History { count }) => handle_history(&storage, &settings, count)?,
        Some(Commands::Config) => {
            println!("Cashly Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("History journal: {}", paths.history_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
            println!("  Export file name: {}", settings.export_file_name);
        }
        None => {
            println!("Cashly - personal finance tracker");
            println!();
            println!("Run 'cashly --help' for usage information.");
        }
    }

    Ok(())
}
