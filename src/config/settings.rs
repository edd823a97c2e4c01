//! User settings for Cashly
//!
//! Currency symbol, the category palette offered to the user and the default
//! export file name. Dates are always shown and exported as `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};

use super::paths::CashlyPaths;
use crate::error::CashlyError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Cashly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category palette suggested to the user; entries may use any label
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Category used when the user does not pick one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Salario",
        "Comida",
        "Transporte",
        "Vivienda",
        "Servicios",
        "Salud",
        "Ocio",
        "Otros",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_category() -> String {
    "Otros".to_string()
}

fn default_export_file_name() -> String {
    "cashly-movimientos.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            categories: default_categories(),
            default_category: default_category(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &CashlyPaths) -> Result<Self, CashlyError> {
        if !paths.settings_file().exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        read_json(paths.settings_file())
            .map_err(|e| CashlyError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashlyPaths) -> Result<(), CashlyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Whether `category` is part of the configured palette
    pub fn is_known_category(&self, category: &str) -> bool {
        let category = category.trim();
        self.categories.iter().any(|c| c == category)
    }
}
