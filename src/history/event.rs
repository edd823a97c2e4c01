//! Ledger events recorded in the history journal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryType, Money};

/// Something that changed the ledger or the budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEvent {
    EntryAdded { entry: Entry },
    EntryRemoved { entry: Entry },
    /// Every entry removed at once; totals describe what was dropped
    LedgerCleared {
        removed: usize,
        income: Money,
        expense: Money,
    },
    BudgetChanged { previous: Money, current: Money },
}

impl LedgerEvent {
    /// Build a clear event from the entries that were removed
    pub fn cleared(entries: &[Entry]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        for entry in entries {
            match entry.entry_type {
                EntryType::Income => income += entry.amount,
                EntryType::Expense => expense += entry.amount,
            }
        }

        Self::LedgerCleared {
            removed: entries.len(),
            income,
            expense,
        }
    }

    /// One-line description using `symbol` for amounts
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            Self::EntryAdded { entry } => format!("added {}", describe_entry(entry, symbol)),
            Self::EntryRemoved { entry } => format!("removed {}", describe_entry(entry, symbol)),
            Self::LedgerCleared {
                removed,
                income,
                expense,
            } => format!(
                "cleared {} entries (income {}, expenses {})",
                removed,
                income.format_with_symbol(symbol),
                expense.format_with_symbol(symbol)
            ),
            Self::BudgetChanged { previous, current } if previous.is_zero() => format!(
                "budget set to {}",
                current.format_with_symbol(symbol)
            ),
            Self::BudgetChanged { previous, current } => format!(
                "budget changed {} -> {}",
                previous.format_with_symbol(symbol),
                current.format_with_symbol(symbol)
            ),
        }
    }
}

fn describe_entry(entry: &Entry, symbol: &str) -> String {
    format!(
        "{} {} '{}' [{}] {}",
        entry.entry_type.as_str(),
        entry.id,
        entry.description,
        entry.category,
        entry.amount.format_with_symbol(symbol)
    )
}

/// A journal line: an event and when it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub at: DateTime<Utc>,
    pub event: LedgerEvent,
}

impl HistoryRecord {
    /// Stamp `event` with the current time
    pub fn now(event: LedgerEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }

    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "{}  {}",
            self.at.format("%Y-%m-%d %H:%M"),
            self.event.describe(symbol)
        )
    }
}
