//! Configuration module for Cashly
//!
//! - Data directory resolution (`CASHLY_DATA_DIR` or the platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashlyPaths;
pub use settings::Settings;
