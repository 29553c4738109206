//! Add Item submenu

use std::io::{BufRead, Write};

use crate::display::format_removal_list;
use crate::error::{LilipatError, LilipatResult};
use crate::models::{Category, Money};
use crate::services::{AddItemInput, CatalogService};
use crate::validation::{is_valid_category, is_valid_url};

use super::MenuController;

const ITEM_MENU: &str = "\nAdd Item Menu\n[1] Add item to purchase\n[2] Remove item from purchase\n[x] Back\n";

impl<R: BufRead, W: Write> MenuController<'_, R, W> {
    pub(super) fn item_menu(&mut self) -> LilipatResult<()> {
        loop {
            self.prompt.say(ITEM_MENU)?;
            match self.prompt.choice("\nEnter choice: ")? {
                Some('1') => {
                    let result = self.add_item();
                    self.settle(result)?;
                }
                Some('2') => {
                    let result = self.remove_item();
                    self.settle(result)?;
                }
                Some('x') | Some('X') => return Ok(()),
                _ => self.prompt.say("Invalid choice. Please try again.\n")?,
            }
        }
    }

    /// Prompt for each field in turn, rejecting bad input as soon as it is typed
    fn add_item(&mut self) -> LilipatResult<()> {
        let name = self.prompt.line("Enter Item Name: ")?;
        if name.is_empty() {
            return Err(LilipatError::Validation("Item name cannot be empty".into()));
        }

        let brand = self.prompt.line("Enter Item Brand: ")?;

        let price_text = self.prompt.line("Enter Item Price: ")?;
        let price = parse_amount(&price_text)?;

        let purchase_link = self.prompt.line("Enter Purchase Link: ")?;
        if !is_valid_url(&purchase_link) {
            return Err(LilipatError::Validation(format!(
                "Invalid purchase link: '{}' (must start with http:// or https:// and contain .com, .org or .net)",
                purchase_link
            )));
        }

        let category = self.prompt.line("Enter Category: ")?;
        if !is_valid_category(&category) {
            let names: Vec<_> = Category::all().iter().map(Category::name).collect();
            return Err(LilipatError::Validation(format!(
                "Invalid category '{}'. Choose one of: {}",
                category,
                names.join(", ")
            )));
        }

        let item = CatalogService::new(self.storage).add_item(AddItemInput {
            name,
            brand,
            price,
            purchase_link,
            category,
        })?;

        self.prompt
            .say(&format!("Item added successfully! ID: {}\n", item.id))
    }

    fn remove_item(&mut self) -> LilipatResult<()> {
        let service = CatalogService::new(self.storage);
        let items = service.list_recent_first()?;
        if items.is_empty() {
            return self.prompt.say("No items to remove.\n");
        }

        self.prompt
            .say(&format!("\n{}", format_removal_list(&items, self.settings)))?;
        let selection = self.prompt.line("\nSelect item to remove: ")?;
        if selection.eq_ignore_ascii_case("x") {
            return Ok(());
        }

        let position: usize = selection
            .parse()
            .map_err(|_| LilipatError::out_of_range(selection.as_str(), 1, items.len()))?;
        let removed = service.remove_item(position)?;

        self.prompt.say("Item removed successfully!\n")?;
        if let Some(month) = removed.budget_month {
            self.prompt.say(&format!(
                "Note: it was slated for {}; that budget still counts its price.\n",
                month
            ))?;
        }
        Ok(())
    }
}

/// Parse a typed price or budget amount
pub(super) fn parse_amount(text: &str) -> LilipatResult<Money> {
    let amount = Money::parse(text).map_err(|e| LilipatError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(LilipatError::Validation("Amount cannot be negative".into()));
    }
    Ok(amount)
}
