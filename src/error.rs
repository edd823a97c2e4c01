//! Custom error types for Cashly
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashly operations
#[derive(Error, Debug)]
pub enum CashlyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input (empty description, non-positive amount, missing date...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export was requested for an empty ledger
    #[error("Nothing to export: the ledger has no entries")]
    EmptyExport,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CashlyError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is a user-facing notice rather than a failure
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::EmptyExport)
    }
}

impl From<std::io::Error> for CashlyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashlyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Cashly operations
pub type CashlyResult<T> = Result<T, CashlyError>;

/// Persisted state under `key` could not be decoded
///
/// Stores never surface this; they fall back to an empty ledger or an unset
/// budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Corrupt data under '{key}': {reason}")]
pub struct CorruptDataError {
    pub key: String,
    pub reason: String,
}

impl CorruptDataError {
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashlyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = CashlyError::validation("Description cannot be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: Description cannot be empty"
        );
        assert!(err.is_validation());
        assert!(!err.is_notice());
    }

    #[test]
    fn test_empty_export_is_notice() {
        let err = CashlyError::EmptyExport;
        assert!(err.is_notice());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cashly_err: CashlyError = io_err.into();
        assert!(matches!(cashly_err, CashlyError::Io(_)));
    }

    #[test]
    fn test_corrupt_data_display() {
        let err = CorruptDataError::new("cashly_budget", "not a number");
        assert_eq!(
            err.to_string(),
            "Corrupt data under 'cashly_budget': not a number"
        );
    }
}
