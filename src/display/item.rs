//! Item display formatting
//!
//! Formats items for the summary, removal and assignment listings.

use crate::config::settings::Settings;
use crate::models::Item;
use crate::services::SortOrder;

/// One-line description: `Name (Brand, category) - $price`
pub fn format_item_line(item: &Item, settings: &Settings) -> String {
    format!(
        "{} ({}, {}) - {}",
        item.name,
        item.brand,
        item.category,
        item.price.format_with_symbol(&settings.currency_symbol)
    )
}

/// Full summary entry with link, date added and budget status
pub fn format_item_summary(item: &Item, settings: &Settings) -> String {
    let mut output = format!("{}\n", format_item_line(item, settings));
    output.push_str(&format!("  {}\n", item.purchase_link));
    output.push_str(&format!(
        "  Added: {}\n",
        item.created_at.format(settings.effective_date_format())
    ));

    match item.budget_month {
        Some(month) => output.push_str(&format!("  To be purchased on: {}\n", month)),
        None => output.push_str("  Not yet budgeted\n"),
    }

    output
}

/// The "Items added" summary in the given order
pub fn format_item_list(items: &[Item], order: SortOrder, settings: &Settings) -> String {
    if items.is_empty() {
        return "No items added yet.\n".to_string();
    }

    let mut output = format!(
        "Items added (by {}, {}):\n",
        order.key.label(),
        order.direction.label()
    );
    for item in items {
        output.push_str(&format_item_summary(item, settings));
    }
    output
}

/// Numbered list for picking an item to remove
///
/// Expects items most-recently-added first; numbers are 1-based.
pub fn format_removal_list(items: &[Item], settings: &Settings) -> String {
    let mut output = String::from("Items to remove:\n");
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "[{}] {}\n    {}\n",
            i + 1,
            format_item_line(item, settings),
            item.purchase_link
        ));
    }
    output.push_str("[x] Back\n");
    output
}

/// Numbered list of items that can still be assigned to a budget
pub fn format_unbudgeted_list(items: &[Item], settings: &Settings) -> String {
    if items.is_empty() {
        return "No unbudgeted items.\n".to_string();
    }

    let mut output = String::from("Unbudgeted Items:\n");
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", i + 1, format_item_line(item, settings)));
    }
    output
}
