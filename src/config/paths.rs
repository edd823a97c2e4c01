//! Path management for Cashly
//!
//! ## Path Resolution Order
//!
//! 1. `CASHLY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `cashly`
//!    (`$XDG_CONFIG_HOME/cashly` or `~/.config/cashly` on Linux,
//!    `%APPDATA%\cashly` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CashlyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CASHLY_DATA_DIR";

/// Manages all paths used by Cashly
#[derive(Debug, Clone)]
pub struct CashlyPaths {
    base_dir: PathBuf,
}

impl CashlyPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CashlyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CashlyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one file per persisted key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("history.jsonl")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CashlyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashlyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashlyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CashlyError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CashlyError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("cashly"))
}
