//! Core data models for lilipat
//!
//! Items on the shopping list, the monthly budgets they can be assigned to,
//! and the small value types both are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod item;
pub mod money;
pub mod month;

pub use budget::Budget;
pub use category::{Category, UnknownCategory};
pub use ids::ItemId;
pub use item::Item;
pub use money::{Money, MoneyParseError};
pub use month::Month;
