//! Item sorting for the summary view
//!
//! The summary view keeps a single [`SortOrder`]. Choosing any sort key
//! sets the key and flips the one shared direction, so choosing the same
//! key twice alternates ascending and descending, and a newly chosen key
//! inherits the flipped direction of whatever was sorted before it.

use std::cmp::Ordering;

use crate::models::Item;

/// What to sort items by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    DateAdded,
    Price,
}

impl SortKey {
    /// Map a summary-menu shortcut letter to its key
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            'q' => Some(Self::DateAdded),
            'w' => Some(Self::Price),
            'e' => Some(Self::Name),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateAdded => "date added",
            Self::Price => "price",
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::DateAdded => a.created_at.cmp(&b.created_at),
            Self::Price => a.price.cmp(&b.price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Current sort of the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Switch to `key`, flipping the shared direction
    pub fn select(&mut self, key: SortKey) {
        self.key = key;
        self.direction = self.direction.flipped();
    }
}

/// Sort items in place by the given order (stable)
pub fn sort_items(items: &mut [Item], order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = order.key.compare(a, b);
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
