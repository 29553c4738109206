//! In-memory budget repository
//!
//! Budgets last for one run of the program and are never written to disk.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::LilipatError;
use crate::models::{Budget, Month};

/// Repository for the session's monthly budgets
#[derive(Default)]
pub struct BudgetRepository {
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Budget>>, LilipatError> {
        self.data
            .read()
            .map_err(|e| LilipatError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Budget>>, LilipatError> {
        self.data
            .write()
            .map_err(|e| LilipatError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Get the budget for a month
    pub fn get(&self, month: Month) -> Result<Option<Budget>, LilipatError> {
        Ok(self.read()?.iter().find(|b| b.month == month).cloned())
    }

    /// Get all budgets in month order
    pub fn get_all(&self) -> Result<Vec<Budget>, LilipatError> {
        let mut budgets = self.read()?.clone();
        budgets.sort_by_key(|b| b.month);
        Ok(budgets)
    }

    /// Insert or replace the budget for its month
    pub fn upsert(&self, budget: Budget) -> Result<(), LilipatError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|b| b.month == budget.month) {
            Some(existing) => *existing = budget,
            None => data.push(budget),
        }
        Ok(())
    }

    /// Delete a month's budget, returning it if it existed
    pub fn delete(&self, month: Month) -> Result<Option<Budget>, LilipatError> {
        let mut data = self.write()?;
        let index = data.iter().position(|b| b.month == month);
        Ok(index.map(|index| data.remove(index)))
    }

    /// Check if a month already has a budget
    pub fn exists(&self, month: Month) -> Result<bool, LilipatError> {
        Ok(self.read()?.iter().any(|b| b.month == month))
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, LilipatError> {
        Ok(self.read()?.len())
    }
}
