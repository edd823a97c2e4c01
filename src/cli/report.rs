//! Report CLI commands
//!
//! Summary, expense chart and the printable report.

use chrono::Local;

use crate::cli::entry::parse_filter;
use crate::config::settings::Settings;
use crate::display::{format_printable_report, format_summary_with_budget, TerminalBarChart};
use crate::error::CashlyResult;
use crate::reports::{aggregate_expenses_by_category, render_expense_chart, summarize};
use crate::services::{BudgetStore, EntryStore};
use crate::storage::Storage;

/// Print the summary, optionally over a filtered view of the ledger
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    entry_type: Option<&str>,
    category: Option<&str>,
) -> CashlyResult<()> {
    let filter = parse_filter(entry_type, category)?;
    let listing = EntryStore::new(storage).list(filter)?;
    let budget = BudgetStore::new(storage).current()?;

    let summary = summarize(&listing, budget);

    if !listing.filter().is_unrestricted() {
        println!("(filtered view)");
    }
    print!(
        "{}",
        format_summary_with_budget(&summary, budget, &settings.currency_symbol)
    );
    Ok(())
}

/// Print the expenses-by-category bar chart
pub fn handle_chart(storage: &Storage, settings: &Settings) -> CashlyResult<()> {
    let entries = storage.entries.get_all()?;
    let totals = aggregate_expenses_by_category(&entries);

    let mut chart = TerminalBarChart::new(settings.currency_symbol.as_str());
    render_expense_chart(&mut chart, &totals);
    print!("{}", chart.output());
    Ok(())
}

/// Print the printable report
pub fn handle_report(storage: &Storage, settings: &Settings) -> CashlyResult<()> {
    let entries = storage.entries.get_all()?;
    let budget = BudgetStore::new(storage).current()?;

    print!(
        "{}",
        format_printable_report(
            &entries,
            budget,
            &settings.currency_symbol,
            Local::now().date_naive(),
        )
    );
    Ok(())
}
