//! Monthly budget model
//!
//! A spending envelope for one month. `remaining` only ever goes down as
//! items are assigned and never below zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;
use super::month::Month;

/// A budget for a specific month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The month this envelope covers (unique across the ledger)
    pub month: Month,

    /// Total envelope
    pub budget: Money,

    /// Funds left after assigned items
    pub remaining: Money,

    /// Items assigned to this month, in assignment order
    pub item_ids: Vec<ItemId>,
}

impl Budget {
    /// Create a new budget with nothing assigned
    pub fn new(month: Month, budget: Money) -> Self {
        Self {
            month,
            budget,
            remaining: budget,
            item_ids: Vec::new(),
        }
    }

    /// Number of items assigned
    pub fn item_count(&self) -> usize {
        self.item_ids.len()
    }

    /// Amount already committed to assigned items
    pub fn spent(&self) -> Money {
        self.budget - self.remaining
    }

    /// Whether an item of the given price still fits
    pub fn can_afford(&self, price: Money) -> bool {
        self.remaining >= price
    }

    /// Record an assignment, deducting its price
    ///
    /// Returns false without touching the budget if the price does not fit.
    pub fn assign(&mut self, item_id: ItemId, price: Money) -> bool {
        if !self.can_afford(price) {
            return false;
        }
        self.item_ids.push(item_id);
        self.remaining -= price;
        true
    }

    /// Whether the item is assigned here
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.item_ids.contains(&item_id)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (remaining {}, {} item/s)",
            self.month,
            self.budget,
            self.remaining,
            self.item_count()
        )
    }
}
