//! Storage layer for lilipat
//!
//! The item list lives in a CSV file; budgets live only in memory.

pub mod budgets;
pub mod file_io;
pub mod items;

pub use budgets::BudgetRepository;
pub use file_io::{append_csv, read_csv, write_csv_atomic, LoadedRecords};
pub use items::{ItemLoadSummary, ItemRepository};

use crate::config::paths::LilipatPaths;
use crate::error::LilipatError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LilipatPaths,
    pub items: ItemRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LilipatPaths) -> Result<Self, LilipatError> {
        paths.ensure_directories()?;

        Ok(Self {
            items: ItemRepository::new(paths.items_file()),
            budgets: BudgetRepository::new(),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LilipatPaths {
        &self.paths
    }

    /// Load the item list from disk
    pub fn load_all(&self) -> Result<ItemLoadSummary, LilipatError> {
        self.items.load()
    }
}
