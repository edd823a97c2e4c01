//! Change history and category palette commands

use crate::config::settings::Settings;
use crate::error::CashlyResult;
use crate::storage::Storage;

/// Print the `count` most recent history records, oldest first
pub fn handle_history(storage: &Storage, settings: &Settings, count: usize) -> CashlyResult<()> {
    let records = match storage.journal() {
        Some(journal) => journal.recent(count)?,
        None => Vec::new(),
    };

    if records.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for record in records {
        println!("{}", record.describe(&settings.currency_symbol));
    }
    Ok(())
}

/// Print the configured category palette
pub fn handle_categories(settings: &Settings) -> CashlyResult<()> {
    println!("Categories:");
    for category in &settings.categories {
        let marker = if *category == settings.default_category {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", category, marker);
    }
    Ok(())
}
