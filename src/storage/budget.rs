//! Budget repository for key-value storage
//!
//! The monthly budget is one scalar persisted as a numeric string. Zero means
//! "not set".

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::{CashlyError, CorruptDataError};
use crate::models::Money;

use super::kv::KeyValueStore;

/// Repository for the monthly budget value
pub struct BudgetRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    value: RwLock<Money>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            value: RwLock::new(Money::zero()),
        }
    }

    /// Load the budget, degrading to zero when the stored value is unusable
    pub fn load(&self) -> Result<(), CashlyError> {
        let loaded = match self.store.get(&self.key)? {
            None => Money::zero(),
            Some(raw) => deserialize_budget(&self.key, &raw).unwrap_or_else(|e| {
                warn!(error = %e, "discarding unreadable budget");
                Money::zero()
            }),
        };

        let mut value = self.value.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *value = loaded;

        Ok(())
    }

    /// Get the current value
    pub fn get(&self) -> Result<Money, CashlyError> {
        let value = self.value.read().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(*value)
    }

    /// Persist a new value, then make it current; returns the previous one
    ///
    /// A failed write leaves the current value unchanged.
    pub fn set(&self, amount: Money) -> Result<Money, CashlyError> {
        let mut value = self.value.write().map_err(|e| {
            CashlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        self.store.set(&self.key, &amount.to_decimal_string())?;
        debug!(budget = %amount, "budget saved");

        Ok(std::mem::replace(&mut *value, amount))
    }
}

/// Decode a persisted budget; anything but a positive finite number is corrupt
pub fn deserialize_budget(key: &str, raw: &str) -> Result<Money, CorruptDataError> {
    let number: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CorruptDataError::new(key, format!("'{}' is not a number", raw.trim())))?;

    Money::from_decimal(number)
        .filter(Money::is_positive)
        .ok_or_else(|| CorruptDataError::new(key, format!("{} is not a positive amount", number)))
}
