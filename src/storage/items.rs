//! Item repository backed by `items.csv`
//!
//! Holds the session's item list in insertion order. Adding appends one
//! record to the file; removing rewrites the whole file. The file is written
//! before memory is touched, so a failed write leaves both unchanged.
//!
//! Budget assignments are session state and are not persisted. Ids are
//! unique within the list: a record whose id repeats an earlier one is given
//! a fresh id on load and the file is rewritten.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LilipatError;
use crate::models::ids::pick_unused_id;
use crate::models::{Item, ItemId, Money, Month};

use super::file_io::{append_csv, read_csv, write_csv_atomic};

/// One line of the item file: id,name,brand,price,purchase_link,category,created_at
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    id: u32,
    name: String,
    brand: String,
    price: i64,
    purchase_link: String,
    category: String,
    created_at: i64,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.get(),
            name: item.name.clone(),
            brand: item.brand.clone(),
            price: item.price.cents(),
            purchase_link: item.purchase_link.clone(),
            category: item.category.name().to_string(),
            created_at: item.created_at.timestamp(),
        }
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = LilipatError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let category = record
            .category
            .parse()
            .map_err(|e| LilipatError::Validation(format!("{}", e)))?;
        let created_at = DateTime::<Utc>::from_timestamp(record.created_at, 0).ok_or_else(|| {
            LilipatError::Validation(format!("Invalid timestamp: {}", record.created_at))
        })?;

        Ok(Item {
            id: ItemId::from_raw(record.id),
            name: record.name,
            brand: record.brand,
            price: Money::from_cents(record.price),
            purchase_link: record.purchase_link,
            category,
            created_at,
            budget_month: None,
        })
    }
}

/// What loading the item file found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemLoadSummary {
    /// Records that could not be read and were left out
    pub skipped: usize,
    /// Records whose id repeated an earlier one and were given a fresh id
    pub reassigned: usize,
}

/// Repository for item persistence
pub struct ItemRepository {
    path: PathBuf,
    data: RwLock<Vec<Item>>,
}

impl ItemRepository {
    /// Create a new item repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Item>>, LilipatError> {
        self.data
            .read()
            .map_err(|e| LilipatError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Item>>, LilipatError> {
        self.data
            .write()
            .map_err(|e| LilipatError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load items from disk, replacing anything in memory
    pub fn load(&self) -> Result<ItemLoadSummary, LilipatError> {
        let loaded = read_csv::<ItemRecord, _>(&self.path)?;
        let mut summary = ItemLoadSummary {
            skipped: loaded.skipped,
            reassigned: 0,
        };

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(loaded.records.len());
        for record in loaded.records {
            let raw_id = record.id;
            let mut item = match Item::try_from(record) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(id = raw_id, "skipping item record: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            if !seen.insert(item.id) {
                let Some(fresh) = pick_unused_id(ItemId::random, |id| seen.contains(&id)) else {
                    tracing::warn!(id = raw_id, "skipping item record: no free id left");
                    summary.skipped += 1;
                    continue;
                };
                tracing::warn!(old = raw_id, new = %fresh, name = %item.name, "duplicate item id reassigned");
                item.id = fresh;
                seen.insert(fresh);
                summary.reassigned += 1;
            }

            items.push(item);
        }

        if summary.reassigned > 0 {
            let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();
            if let Err(e) = write_csv_atomic(&self.path, &records) {
                tracing::warn!("could not save reassigned item ids: {}", e);
            }
        }

        tracing::debug!(
            count = items.len(),
            skipped = summary.skipped,
            reassigned = summary.reassigned,
            "loaded items from {}",
            self.path.display()
        );
        *self.write()? = items;
        Ok(summary)
    }

    /// Persist one new item to the end of the file, then keep it in memory
    pub fn append(&self, item: Item) -> Result<(), LilipatError> {
        let mut data = self.write()?;
        append_csv(&self.path, &ItemRecord::from(&item))?;
        data.push(item);
        Ok(())
    }

    /// Remove the item at a storage index, rewriting the file
    pub fn remove_at(&self, index: usize) -> Result<Item, LilipatError> {
        let mut data = self.write()?;
        if index >= data.len() {
            return Err(LilipatError::out_of_range(index.to_string(), 0, data.len().saturating_sub(1)));
        }

        let records: Vec<ItemRecord> = data
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| ItemRecord::from(item))
            .collect();
        write_csv_atomic(&self.path, &records)?;

        Ok(data.remove(index))
    }

    /// Get all items in insertion order
    pub fn get_all(&self) -> Result<Vec<Item>, LilipatError> {
        Ok(self.read()?.clone())
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> Result<Option<Item>, LilipatError> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    /// Check whether an ID is already used
    pub fn contains(&self, id: ItemId) -> Result<bool, LilipatError> {
        Ok(self.read()?.iter().any(|item| item.id == id))
    }

    /// Set or clear the budget month on the item with this ID
    ///
    /// Returns false if no item has the ID.
    pub fn set_budget_month(&self, id: ItemId, month: Option<Month>) -> Result<bool, LilipatError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.budget_month = month;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear the budget month on every item slated under `month`
    pub fn clear_budget_month(&self, month: Month) -> Result<usize, LilipatError> {
        let mut data = self.write()?;
        let mut cleared = 0;
        for item in data.iter_mut().filter(|item| item.budget_month == Some(month)) {
            item.budget_month = None;
            cleared += 1;
        }
        Ok(cleared)
    }

    /// Count items
    pub fn count(&self) -> Result<usize, LilipatError> {
        Ok(self.read()?.len())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
