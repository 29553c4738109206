//! Budget service
//!
//! Monthly purchase envelopes: creating them, assigning unbudgeted items
//! while funds last, viewing what each month holds, and tearing a month
//! down again.

use crate::error::{LilipatError, LilipatResult};
use crate::models::{Budget, Item, ItemId, Money, Month};
use crate::storage::Storage;

/// One budget per month
pub const MAX_BUDGETS: usize = 12;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// A budget joined with the catalog items it references
#[derive(Debug, Clone)]
pub struct BudgetView {
    pub budget: Budget,
    /// Assigned items still in the catalog, in assignment order
    pub items: Vec<Item>,
    /// Assigned ids whose item has since been removed from the catalog
    pub missing: Vec<ItemId>,
}

/// Outcome of removing a month's budget
#[derive(Debug, Clone)]
pub struct RemovedBudget {
    pub budget: Budget,
    /// Items returned to the unbudgeted pool
    pub released_items: usize,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Fail if no more budgets can be created
    pub fn ensure_capacity(&self) -> LilipatResult<()> {
        if self.storage.budgets.count()? >= MAX_BUDGETS {
            return Err(LilipatError::Capacity {
                entity_type: "Budget",
                limit: MAX_BUDGETS,
            });
        }
        Ok(())
    }

    /// Fail if the month already has a budget
    pub fn ensure_month_free(&self, month: Month) -> LilipatResult<()> {
        if self.storage.budgets.exists(month)? {
            return Err(LilipatError::Conflict {
                entity_type: "Budget",
                identifier: month.name().to_string(),
            });
        }
        Ok(())
    }

    /// Create a budget for a month with nothing assigned yet
    pub fn set_budget(&self, month: Month, total: Money) -> LilipatResult<Budget> {
        self.ensure_capacity()?;
        self.ensure_month_free(month)?;

        if total.is_negative() {
            return Err(LilipatError::Validation("Budget cannot be negative".into()));
        }

        let budget = Budget::new(month, total);
        self.storage.budgets.upsert(budget.clone())?;

        tracing::info!(%month, total = total.cents(), "budget set");

        Ok(budget)
    }

    /// Items not assigned to any budget, in catalog order
    ///
    /// Computed from current state on every call.
    pub fn unbudgeted_items(&self) -> LilipatResult<Vec<Item>> {
        Ok(self
            .storage
            .items
            .get_all()?
            .into_iter()
            .filter(Item::is_unbudgeted)
            .collect())
    }

    /// Assign an unbudgeted item to a month's budget
    ///
    /// Rejected with no state change if the price exceeds what remains.
    pub fn assign_item(&self, month: Month, item_id: ItemId) -> LilipatResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(month)?
            .ok_or_else(|| LilipatError::budget_not_found(month.name()))?;

        let item = self
            .storage
            .items
            .get(item_id)?
            .ok_or_else(|| LilipatError::item_not_found(item_id.to_string()))?;

        if let Some(assigned) = item.budget_month {
            return Err(LilipatError::Conflict {
                entity_type: "Budget assignment",
                identifier: format!("{} is already slated for {}", item.name, assigned),
            });
        }

        let before = budget.remaining;
        if !budget.assign(item.id, item.price) {
            return Err(LilipatError::InsufficientFunds {
                month: month.name().to_string(),
                needed: item.price.cents(),
                available: budget.remaining.cents(),
            });
        }

        if !self.storage.items.set_budget_month(item.id, Some(month))? {
            return Err(LilipatError::item_not_found(item.id.to_string()));
        }
        self.storage.budgets.upsert(budget.clone())?;

        tracing::info!(
            %month,
            id = %item.id,
            name = %item.name,
            "item assigned: remaining {} -> {}",
            before,
            budget.remaining
        );

        Ok(budget)
    }

    /// Show a month's budget with the items it holds
    pub fn view_budget(&self, month: Month) -> LilipatResult<BudgetView> {
        let budget = self
            .storage
            .budgets
            .get(month)?
            .ok_or_else(|| LilipatError::budget_not_found(month.name()))?;

        let catalog = self.storage.items.get_all()?;
        let mut items = Vec::with_capacity(budget.item_count());
        let mut missing = Vec::new();

        for id in &budget.item_ids {
            match catalog.iter().find(|item| item.id == *id) {
                Some(item) => items.push(item.clone()),
                None => missing.push(*id),
            }
        }

        if !missing.is_empty() {
            tracing::warn!(%month, missing = missing.len(), "budget references items no longer in the catalog");
        }

        Ok(BudgetView {
            budget,
            items,
            missing,
        })
    }

    /// Delete a month's budget and return its items to the unbudgeted pool
    pub fn remove_budget(&self, month: Month) -> LilipatResult<RemovedBudget> {
        let budget = self
            .storage
            .budgets
            .delete(month)?
            .ok_or_else(|| LilipatError::budget_not_found(month.name()))?;

        let released_items = self.storage.items.clear_budget_month(month)?;

        tracing::info!(%month, released_items, "budget removed");

        Ok(RemovedBudget {
            budget,
            released_items,
        })
    }

    /// All budgets in month order
    pub fn list_budgets(&self) -> LilipatResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LilipatPaths;
    use crate::services::catalog::{AddItemInput, CatalogService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LilipatPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, name: &str, cents: i64) -> Item {
        CatalogService::new(storage)
            .add_item(AddItemInput {
                name: name.to_string(),
                brand: String::new(),
                price: Money::from_cents(cents),
                purchase_link: "https://shop.com/x".to_string(),
                category: "furniture".to_string(),
            })
            .unwrap()
    }

    fn month(n: u8) -> Month {
        Month::new(n).unwrap()
    }

    #[test]
    fn test_set_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = service.set_budget(month(3), Money::from_cents(10000)).unwrap();
        assert_eq!(budget.remaining.cents(), 10000);
        assert!(budget.item_ids.is_empty());
    }

    #[test]
    fn test_duplicate_month_conflicts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(month(3), Money::from_cents(100)).unwrap();
        let result = service.set_budget(month(3), Money::from_cents(200));
        assert!(matches!(result, Err(LilipatError::Conflict { .. })));
        assert_eq!(
            service.view_budget(month(3)).unwrap().budget.budget.cents(),
            100
        );
    }

    #[test]
    fn test_capacity_checked_before_conflict() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        for m in Month::all() {
            service.set_budget(m, Money::from_cents(100)).unwrap();
        }
        assert!(matches!(
            service.set_budget(month(1), Money::from_cents(100)),
            Err(LilipatError::Capacity { limit: 12, .. })
        ));
    }

    #[test]
    fn test_assign_item_deducts_and_marks_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let lamp = add(&storage, "Lamp", 1999);

        service.set_budget(month(5), Money::from_cents(5000)).unwrap();
        let budget = service.assign_item(month(5), lamp.id).unwrap();

        assert_eq!(budget.remaining.cents(), 3001);
        assert_eq!(budget.item_ids, vec![lamp.id]);
        let stored = storage.items.get(lamp.id).unwrap().unwrap();
        assert_eq!(stored.budget_month, Some(month(5)));
        assert!(service.unbudgeted_items().unwrap().is_empty());
    }

    #[test]
    fn test_insufficient_funds_changes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let sofa = add(&storage, "Sofa", 60000);

        service.set_budget(month(5), Money::from_cents(50000)).unwrap();
        let result = service.assign_item(month(5), sofa.id);

        assert!(matches!(result, Err(LilipatError::InsufficientFunds { .. })));
        let view = service.view_budget(month(5)).unwrap();
        assert_eq!(view.budget.remaining.cents(), 50000);
        assert!(view.items.is_empty());
        assert!(storage.items.get(sofa.id).unwrap().unwrap().is_unbudgeted());
    }

    #[test]
    fn test_remaining_never_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let prices = [700, 300, 450, 1, 999, 250, 0, 120];
        let items: Vec<Item> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| add(&storage, &format!("Item {}", i), *p))
            .collect();

        service.set_budget(month(8), Money::from_cents(1500)).unwrap();
        for item in &items {
            let before = service.view_budget(month(8)).unwrap().budget;
            match service.assign_item(month(8), item.id) {
                Ok(after) => {
                    assert_eq!(after.remaining, before.remaining - item.price);
                }
                Err(LilipatError::InsufficientFunds { .. }) => {
                    let after = service.view_budget(month(8)).unwrap().budget;
                    assert_eq!(after, before);
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
            let current = service.view_budget(month(8)).unwrap().budget;
            assert!(!current.remaining.is_negative());
        }
    }

    #[test]
    fn test_assign_already_budgeted_item_conflicts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let desk = add(&storage, "Desk", 100);

        service.set_budget(month(1), Money::from_cents(1000)).unwrap();
        service.set_budget(month(2), Money::from_cents(1000)).unwrap();
        service.assign_item(month(1), desk.id).unwrap();

        let result = service.assign_item(month(2), desk.id);
        assert!(matches!(result, Err(LilipatError::Conflict { .. })));
        assert_eq!(service.view_budget(month(2)).unwrap().budget.remaining.cents(), 1000);
    }

    #[test]
    fn test_assign_unknown_budget_or_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let desk = add(&storage, "Desk", 100);

        assert!(service.assign_item(month(4), desk.id).unwrap_err().is_not_found());

        service.set_budget(month(4), Money::from_cents(1000)).unwrap();
        assert!(service
            .assign_item(month(4), ItemId::from_raw(0))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_view_missing_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service.view_budget(month(9)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_view_skips_removed_items() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let catalog = CatalogService::new(&storage);
        let rug = add(&storage, "Rug", 100);
        let vase = add(&storage, "Vase", 200);

        service.set_budget(month(6), Money::from_cents(1000)).unwrap();
        service.assign_item(month(6), rug.id).unwrap();
        service.assign_item(month(6), vase.id).unwrap();

        // Vase is the most recent, so it's first in the removal listing
        catalog.remove_item(1).unwrap();

        let view = service.view_budget(month(6)).unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Rug");
        assert_eq!(view.missing, vec![vase.id]);
        assert_eq!(view.budget.remaining.cents(), 700);
    }

    #[test]
    fn test_remove_budget_only_releases_its_items() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let a = add(&storage, "A", 100);
        let b = add(&storage, "B", 100);
        let c = add(&storage, "C", 100);

        service.set_budget(month(3), Money::from_cents(1000)).unwrap();
        service.set_budget(month(4), Money::from_cents(1000)).unwrap();
        service.assign_item(month(3), a.id).unwrap();
        service.assign_item(month(3), b.id).unwrap();
        service.assign_item(month(4), c.id).unwrap();

        let removed = service.remove_budget(month(3)).unwrap();
        assert_eq!(removed.released_items, 2);

        assert!(storage.items.get(a.id).unwrap().unwrap().is_unbudgeted());
        assert!(storage.items.get(b.id).unwrap().unwrap().is_unbudgeted());
        assert_eq!(storage.items.get(c.id).unwrap().unwrap().budget_month, Some(month(4)));
        assert!(service.view_budget(month(3)).unwrap_err().is_not_found());
        assert_eq!(service.list_budgets().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_missing_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service.remove_budget(month(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_month_can_be_reused_after_removal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(month(12), Money::from_cents(1)).unwrap();
        service.remove_budget(month(12)).unwrap();
        assert!(service.set_budget(month(12), Money::from_cents(2)).is_ok());
    }

    #[test]
    fn test_assign_with_repeated_file_ids_budgets_one_item() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("items.csv"),
            "7,Lamp,Acme,1000,https://a.com,electronics,1700000000\n\
             7,Sofa,Acme,5000,https://b.com,furniture,1700000001\n",
        )
        .unwrap();
        let storage = Storage::new(LilipatPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.load_all().unwrap();
        let service = BudgetService::new(&storage);

        service.set_budget(month(3), Money::from_cents(2000)).unwrap();
        let lamp = service.unbudgeted_items().unwrap()[0].clone();
        assert_eq!(lamp.name, "Lamp");
        let budget = service.assign_item(month(3), lamp.id).unwrap();

        assert_eq!(budget.remaining.cents(), 1000);
        assert_eq!(budget.item_count(), 1);
        let pool: Vec<_> = service
            .unbudgeted_items()
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(pool, vec!["Sofa"]);
    }
}
