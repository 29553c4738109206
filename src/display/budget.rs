//! Budget display formatting

use crate::config::settings::Settings;
use crate::models::Budget;
use crate::services::BudgetView;

use super::item::format_item_line;

/// Per-month totals, remaining funds and item counts
pub fn format_budget_summary(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets set yet.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::from("Budget Summary:\n");
    for budget in budgets {
        output.push_str(&format!(
            "{}:\n  Total budget: {}\n  Remaining after purchases: {}\n  {} item/s to purchase.\n\n",
            budget.month,
            budget.budget.format_with_symbol(symbol),
            budget.remaining.format_with_symbol(symbol),
            budget.item_count()
        ));
    }
    output
}

/// A month's budget with every assigned item still in the catalog
pub fn format_budget_details(view: &BudgetView, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let budget = &view.budget;

    let mut output = format!("Budget for {}:\n", budget.month);
    output.push_str(&format!("Total Budget: {}\n", budget.budget.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Remaining Budget: {}\n",
        budget.remaining.format_with_symbol(symbol)
    ));
    output.push_str("Items in Budget:\n");

    if view.items.is_empty() && view.missing.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &view.items {
        output.push_str(&format!("- {}\n", format_item_line(item, settings)));
    }
    if !view.missing.is_empty() {
        output.push_str(&format!(
            "  ({} assigned item/s no longer in the item list)\n",
            view.missing.len()
        ));
    }

    output
}

/// Numbered list of budget months
pub fn format_budget_choices(budgets: &[Budget]) -> String {
    budgets
        .iter()
        .enumerate()
        .map(|(i, budget)| format!("[{}] {}\n", i + 1, budget.month))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Item, ItemId, Money, Month};

    fn budget(month: u8, total: i64, remaining: i64, ids: &[u32]) -> Budget {
        let mut budget = Budget::new(Month::new(month).unwrap(), Money::from_cents(total));
        budget.remaining = Money::from_cents(remaining);
        budget.item_ids = ids.iter().map(|id| ItemId::from_raw(*id)).collect();
        budget
    }

    #[test]
    fn test_summary() {
        let text = format_budget_summary(&[budget(3, 10000, 3001, &[1, 2])], &Settings::default());
        assert!(text.contains("March:\n"));
        assert!(text.contains("  Total budget: $100.00\n"));
        assert!(text.contains("  Remaining after purchases: $30.01\n"));
        assert!(text.contains("  2 item/s to purchase.\n"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            format_budget_summary(&[], &Settings::default()),
            "No budgets set yet.\n"
        );
    }

    #[test]
    fn test_details_reports_missing_items() {
        let item = Item::new(
            ItemId::from_raw(1),
            "Rug",
            "Loom",
            Money::from_cents(2500),
            "https://loom.com/rug",
            Category::LivingRoom,
        );
        let view = BudgetView {
            budget: budget(6, 10000, 5000, &[1, 2]),
            items: vec![item],
            missing: vec![ItemId::from_raw(2)],
        };

        let text = format_budget_details(&view, &Settings::default());
        assert!(text.starts_with("Budget for June:\n"));
        assert!(text.contains("- Rug (Loom, living room) - $25.00\n"));
        assert!(text.contains("1 assigned item/s no longer in the item list"));
    }

    #[test]
    fn test_choices() {
        let text = format_budget_choices(&[budget(1, 0, 0, &[]), budget(9, 0, 0, &[])]);
        assert_eq!(text, "[1] January\n[2] September\n");
    }
}
