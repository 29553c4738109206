//! Item model
//!
//! A thing the user intends to buy, optionally slated for a month's budget.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ItemId;
use super::money::Money;
use super::month::Month;

/// An item on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Random integer identity
    pub id: ItemId,

    /// Item name (never empty)
    pub name: String,

    /// Brand, may be empty
    #[serde(default)]
    pub brand: String,

    /// Price in cents
    pub price: Money,

    /// Where to buy it
    pub purchase_link: String,

    /// Category the item is filed under
    pub category: Category,

    /// When the item was added, whole seconds
    pub created_at: DateTime<Utc>,

    /// The budget this item is slated under, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_month: Option<Month>,
}

impl Item {
    /// Create a new, unbudgeted item stamped with the current time
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        purchase_link: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            purchase_link: purchase_link.into(),
            category,
            created_at: Utc::now().trunc_subsecs(0),
            budget_month: None,
        }
    }

    /// Whether the item is not yet assigned to any budget
    pub fn is_unbudgeted(&self) -> bool {
        self.budget_month.is_none()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}) - {}", self.name, self.brand, self.category, self.price)
    }
}
