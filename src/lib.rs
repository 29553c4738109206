//! Lilipat - terminal shopping list and monthly purchase budget tracker
//!
//! Items to buy are kept in a CSV file between runs. Within a session the
//! user sets a budget for a month and assigns unbudgeted items to it while
//! the remaining funds cover their prices.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and display settings
//! - `error`: Custom error types
//! - `models`: Items, budgets, money, months and categories
//! - `storage`: CSV item store and in-memory budget ledger
//! - `services`: Catalog and budget operations
//! - `display`: Text formatting for the menus
//! - `menu`: The interactive menu controller
//!
//! # Example
//!
//! ```rust,ignore
//! use lilipat::config::{paths::LilipatPaths, settings::Settings};
//! use lilipat::menu::MenuController;
//! use lilipat::storage::Storage;
//!
//! let paths = LilipatPaths::new()?;
//! let settings = Settings::default();
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! MenuController::new(&storage, &settings, std::io::stdin().lock(), std::io::stdout()).run()?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::LilipatError;
