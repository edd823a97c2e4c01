//! Budget store
//!
//! Owns the monthly budget scalar. Saving replaces the value wholesale.

use tracing::info;

use crate::error::{CashlyError, CashlyResult};
use crate::history::LedgerEvent;
use crate::models::Money;
use crate::storage::Storage;

/// Service owning the monthly budget
pub struct BudgetStore<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetStore<'a> {
    /// Create a new budget store
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace the monthly budget
    ///
    /// The value must be a finite number greater than zero once rounded to
    /// cents.
    pub fn save(&self, value: f64) -> CashlyResult<Money> {
        let amount = Money::from_decimal(value)
            .filter(Money::is_positive)
            .ok_or_else(|| {
                CashlyError::validation("Budget must be a valid number greater than 0")
            })?;

        let previous = self.storage.budget.set(amount)?;

        info!(budget = %amount, "monthly budget saved");
        self.storage.record(LedgerEvent::BudgetChanged {
            previous,
            current: amount,
        });

        Ok(amount)
    }

    /// The current monthly budget; zero when unset
    pub fn current(&self) -> CashlyResult<Money> {
        self.storage.budget.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashlyPaths;
    use tempfile::TempDir;

    #[test]
    fn test_unset_budget_is_zero() {
        let storage = Storage::in_memory();
        let store = BudgetStore::new(&storage);
        assert!(store.current().unwrap().is_zero());
    }

    #[test]
    fn test_save_replaces_value() {
        let storage = Storage::in_memory();
        let store = BudgetStore::new(&storage);

        store.save(1000.0).unwrap();
        let saved = store.save(1500.5).unwrap();

        assert_eq!(saved.cents(), 150050);
        assert_eq!(store.current().unwrap(), saved);
    }

    #[test]
    fn test_invalid_values_rejected_without_change() {
        let storage = Storage::in_memory();
        let store = BudgetStore::new(&storage);
        store.save(1000.0).unwrap();

        for value in [0.0, -1.0, f64::NAN, f64::INFINITY, 0.001] {
            let err = store.save(value).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", value);
        }
        assert_eq!(store.current().unwrap(), Money::from_units(1000));
    }

    #[test]
    fn test_persists_and_records_change() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        BudgetStore::new(&storage).save(1200.0).unwrap();

        let mut reopened = Storage::new(&paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(
            BudgetStore::new(&reopened).current().unwrap(),
            Money::from_units(1200)
        );

        let records = storage.journal().unwrap().recent(10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].event,
            LedgerEvent::BudgetChanged {
                previous: Money::zero(),
                current: Money::from_units(1200),
            }
        );
    }

    #[test]
    fn test_failed_write_keeps_budget() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        let store = BudgetStore::new(&storage);
        store.save(1000.0).unwrap();

        // A directory in place of the budget file makes the rename fail
        let budget_file = paths.data_dir().join(crate::storage::BUDGET_KEY);
        std::fs::remove_file(&budget_file).unwrap();
        std::fs::create_dir(&budget_file).unwrap();
        std::fs::write(budget_file.join("keep"), "x").unwrap();

        assert!(store.save(500.0).is_err());
        assert_eq!(store.current().unwrap(), Money::from_units(1000));
    }
}
