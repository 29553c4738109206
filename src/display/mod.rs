//! Display formatting for terminal output
//!
//! Pure string builders; the menu layer decides where the text goes.

pub mod budget;
pub mod item;

pub use budget::{format_budget_choices, format_budget_details, format_budget_summary};
pub use item::{
    format_item_line, format_item_list, format_item_summary, format_removal_list,
    format_unbudgeted_list,
};
