//! Ledger filters
//!
//! A filter restricts a listing by entry type and/or category. The text form
//! `"all"` (or an absent value) means no restriction on that dimension.

use super::entry::{Entry, EntryType, EntryValidationError};

/// Sentinel meaning "no restriction"
pub const ALL: &str = "all";

/// Options for filtering ledger entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Filter by income/expense
    pub entry_type: Option<EntryType>,
    /// Filter by exact category label
    pub category: Option<String>,
}

impl EntryFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by entry type
    pub fn entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into().trim().to_string());
        self
    }

    /// Build a filter from the raw text a UI control hands over
    pub fn from_text(
        entry_type: Option<&str>,
        category: Option<&str>,
    ) -> Result<Self, EntryValidationError> {
        let mut filter = Self::new();

        if let Some(t) = restriction(entry_type) {
            filter = filter.entry_type(t.parse()?);
        }
        if let Some(c) = restriction(category) {
            filter = filter.category(c);
        }

        Ok(filter)
    }

    /// Whether the filter restricts nothing
    pub fn is_unrestricted(&self) -> bool {
        self.entry_type.is_none() && self.category.is_none()
    }

    /// Check whether an entry passes the filter
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(t) = self.entry_type {
            if entry.entry_type != t {
                return false;
            }
        }
        if let Some(c) = &self.category {
            if &entry.category != c {
                return false;
            }
        }
        true
    }
}

fn restriction(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;

    fn entry(entry_type: EntryType, category: &str) -> Entry {
        EntryDraft::new(entry_type, "x", category, 10.0, "2025-01-15")
            .into_entry()
            .unwrap()
    }

    #[test]
    fn test_all_means_unrestricted() {
        let filter = EntryFilter::from_text(Some("all"), Some("ALL")).unwrap();
        assert!(filter.is_unrestricted());
        assert_eq!(EntryFilter::from_text(None, None).unwrap(), EntryFilter::new());
    }

    #[test]
    fn test_type_and_category_restrict() {
        let filter = EntryFilter::from_text(Some("expense"), Some("Comida")).unwrap();

        assert!(filter.matches(&entry(EntryType::Expense, "Comida")));
        assert!(!filter.matches(&entry(EntryType::Income, "Comida")));
        assert!(!filter.matches(&entry(EntryType::Expense, "Ocio")));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(EntryFilter::from_text(Some("refund"), None).is_err());
    }
}
