//! Item catalog service
//!
//! Adds, removes and lists the items on the shopping list. The catalog is
//! shown most-recently-added first, and removal works by position in that
//! listing.

use crate::error::{LilipatError, LilipatResult};
use crate::models::ids::{pick_unused_id, MAX_ITEM_ID};
use crate::models::{Category, Item, ItemId, Money};
use crate::storage::Storage;
use crate::validation::is_valid_url;

use super::sort::{sort_items, SortOrder};

/// Service for the item catalog
pub struct CatalogService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new item
#[derive(Debug, Clone)]
pub struct AddItemInput {
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub purchase_link: String,
    pub category: String,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, persist and return a new item
    ///
    /// Any validation failure aborts the whole add; nothing is written.
    pub fn add_item(&self, input: AddItemInput) -> LilipatResult<Item> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(LilipatError::Validation("Item name cannot be empty".into()));
        }

        if !is_valid_url(&input.purchase_link) {
            return Err(LilipatError::Validation(format!(
                "Invalid purchase link: '{}'",
                input.purchase_link
            )));
        }

        let category: Category = input
            .category
            .parse()
            .map_err(|e| LilipatError::Validation(format!("{}", e)))?;

        if input.price.is_negative() {
            return Err(LilipatError::Validation("Price cannot be negative".into()));
        }

        let id = self.generate_id()?;
        let item = Item::new(
            id,
            name,
            input.brand.trim(),
            input.price,
            input.purchase_link,
            category,
        );

        self.storage.items.append(item.clone())?;

        tracing::info!(id = %item.id, name = %item.name, price = item.price.cents(), "item added");

        Ok(item)
    }

    /// Pick a random id not already used by any item
    pub fn generate_id(&self) -> LilipatResult<ItemId> {
        self.generate_id_from(ItemId::random)
    }

    /// Pick an id drawn from `source` that no item uses yet
    pub fn generate_id_from(&self, source: impl FnMut() -> ItemId) -> LilipatResult<ItemId> {
        let items = self.storage.items.get_all()?;
        pick_unused_id(source, |id| items.iter().any(|item| item.id == id)).ok_or(
            LilipatError::Capacity {
                entity_type: "Item id",
                limit: MAX_ITEM_ID as usize,
            },
        )
    }

    /// Remove the item at a 1-based position in the most-recent-first listing
    pub fn remove_item(&self, display_index: usize) -> LilipatResult<Item> {
        let count = self.storage.items.count()?;
        if display_index < 1 || display_index > count {
            return Err(LilipatError::out_of_range(display_index.to_string(), 1, count));
        }

        let removed = self.storage.items.remove_at(count - display_index)?;

        if let Some(month) = removed.budget_month {
            tracing::warn!(id = %removed.id, %month, "removed an item that was assigned to a budget");
        }
        tracing::info!(id = %removed.id, name = %removed.name, "item removed");

        Ok(removed)
    }

    /// List items most-recently-added first
    pub fn list_recent_first(&self) -> LilipatResult<Vec<Item>> {
        let mut items = self.storage.items.get_all()?;
        items.reverse();
        Ok(items)
    }

    /// List items in the given sort order
    ///
    /// Returns a sorted copy; the stored order is untouched.
    pub fn list_sorted(&self, order: SortOrder) -> LilipatResult<Vec<Item>> {
        let mut items = self.storage.items.get_all()?;
        sort_items(&mut items, order);
        Ok(items)
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> LilipatResult<Option<Item>> {
        self.storage.items.get(id)
    }

    pub fn count(&self) -> LilipatResult<usize> {
        self.storage.items.count()
    }
}
