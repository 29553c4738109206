//! Service layer for lilipat
//!
//! Business logic on top of the storage layer: validation, the catalog's
//! display ordering, and the cross-references between budgets and items.

pub mod budget;
pub mod catalog;
pub mod sort;

pub use budget::{BudgetService, BudgetView, RemovedBudget, MAX_BUDGETS};
pub use catalog::{AddItemInput, CatalogService};
pub use sort::{sort_items, SortDirection, SortKey, SortOrder};
