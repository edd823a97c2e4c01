//! Cashly - personal finance tracker
//!
//! This library provides the core of the Cashly ledger: income and expense
//! entries, a monthly budget, summaries with budget alerts, expense totals by
//! category and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, filters)
//! - `storage`: Key-value persistence of the ledger and budget
//! - `services`: Entry and budget stores, the only writers of state
//! - `reports`: Summary and category aggregation
//! - `export`: CSV export
//! - `history`: Journal of ledger and budget changes
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashly::config::{paths::CashlyPaths, settings::Settings};
//! use cashly::storage::Storage;
//!
//! let paths = CashlyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(&paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashlyError, CashlyResult};
