//! Ledger entry model
//!
//! An entry is one income or expense record. Entries are created from an
//! unvalidated [`EntryDraft`] and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Date format accepted for entry dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether an entry brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    /// Wire name, as persisted and exported
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for EntryType {
    type Err = EntryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EntryValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Free-text description, stored trimmed
    pub description: String,

    /// Category label, stored trimmed
    pub category: String,

    /// Always positive; the sign comes from `entry_type`
    pub amount: Money,

    /// Calendar date of the movement
    pub date: NaiveDate,
}

impl Entry {
    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }

    /// Check the invariants a stored entry must hold
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        check_text(&self.description, EntryValidationError::EmptyDescription)?;
        check_text(&self.category, EntryValidationError::EmptyCategory)?;
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.entry_type,
            self.description,
            self.amount
        )
    }
}

/// User input for a new entry, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub entry_type: EntryType,
    pub description: String,
    pub category: String,
    /// Raw amount as typed; may be NaN, infinite or non-positive
    pub amount: f64,
    /// Raw date text (`YYYY-MM-DD`); empty means missing
    pub date: String,
}

impl EntryDraft {
    pub fn new(
        entry_type: EntryType,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            entry_type,
            description: description.into(),
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    /// Validate the draft and build an entry with a fresh id
    pub fn into_entry(self) -> Result<Entry, EntryValidationError> {
        let description = check_text(&self.description, EntryValidationError::EmptyDescription)?;
        let category = check_text(&self.category, EntryValidationError::EmptyCategory)?;

        let amount = Money::from_decimal(self.amount)
            .filter(Money::is_positive)
            .ok_or(EntryValidationError::NonPositiveAmount)?;

        let date_text = self.date.trim();
        if date_text.is_empty() {
            return Err(EntryValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| EntryValidationError::InvalidDate(date_text.to_string()))?;

        Ok(Entry {
            id: EntryId::new(),
            entry_type: self.entry_type,
            description,
            category,
            amount,
            date,
        })
    }
}

fn check_text(value: &str, err: EntryValidationError) -> Result<String, EntryValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    EmptyCategory,
    NonPositiveAmount,
    MissingDate,
    InvalidDate(String),
    UnknownType(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Amount must be a number greater than 0"),
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", s),
            Self::UnknownType(s) => {
                write!(f, "Unknown entry type '{}', expected income or expense", s)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
