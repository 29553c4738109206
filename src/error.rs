//! Custom error types for lilipat
//!
//! Every domain failure a menu action can hit is one variant here. The menu
//! layer prints the message and returns the user to the enclosing menu.

use thiserror::Error;

/// The main error type for lilipat operations
#[derive(Error, Debug)]
pub enum LilipatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Bad item name, purchase link, category or amount
    #[error("Validation error: {0}")]
    Validation(String),

    /// A selection or month fell outside the accepted bounds
    #[error("Invalid selection: {value} (expected {min}-{max})")]
    Range {
        value: String,
        min: usize,
        max: usize,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The entity already exists or is already claimed
    #[error("{entity_type} already exists: {identifier}")]
    Conflict {
        entity_type: &'static str,
        identifier: String,
    },

    /// A bounded collection is full
    #[error("{entity_type} list is full (limit {limit})")]
    Capacity {
        entity_type: &'static str,
        limit: usize,
    },

    /// Assigning an item would take a budget below zero
    #[error("Not enough budget for this item in {month}: need {needed}, have {available}")]
    InsufficientFunds {
        month: String,
        needed: i64,
        available: i64,
    },

    /// The item file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Standard input reached end-of-file
    #[error("Input closed")]
    InputClosed,
}

impl LilipatError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Create a range error for a 1-based selection
    pub fn out_of_range(value: impl Into<String>, min: usize, max: usize) -> Self {
        Self::Range {
            value: value.into(),
            min,
            max,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means persisted data was not written
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if stdin has been exhausted
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for LilipatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LilipatError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for lilipat operations
pub type LilipatResult<T> = Result<T, LilipatError>;
