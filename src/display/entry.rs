//! Ledger display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Entry, EntryType, DATE_FORMAT};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl EntryRow {
    fn new(entry: &Entry, symbol: &str) -> Self {
        let sign = match entry.entry_type {
            EntryType::Income => "+",
            EntryType::Expense => "-",
        };

        Self {
            id: entry.id.to_string(),
            date: entry.date.format(DATE_FORMAT).to_string(),
            entry_type: entry.entry_type.to_string(),
            description: entry.description.clone(),
            category: entry.category.clone(),
            amount: format!("{}{}", sign, entry.amount.format_with_symbol(symbol)),
        }
    }
}

/// Format entries as a ledger table, in the order given
pub fn format_entry_table<'a, I>(entries: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows: Vec<EntryRow> = entries
        .into_iter()
        .map(|e| EntryRow::new(e, symbol))
        .collect();

    if rows.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(5), Alignment::right());

    format!("{}\n", table)
}

/// One-line description of an entry, used in confirmations
pub fn format_entry_line(entry: &Entry, symbol: &str) -> String {
    format!(
        "{} {} {} {} [{}] {}",
        entry.id,
        entry.date.format(DATE_FORMAT),
        entry.entry_type,
        entry.description,
        entry.category,
        entry.amount.format_with_symbol(symbol)
    )
}
