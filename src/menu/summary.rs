//! Summarize submenu

use std::io::{BufRead, Write};

use crate::display::{format_budget_details, format_budget_summary, format_item_list};
use crate::error::LilipatResult;
use crate::models::Month;
use crate::services::{BudgetService, CatalogService, SortKey, SortOrder};

use super::MenuController;

const SUMMARY_MENU: &str = "\nSummarize Menu\n[1] Items added\n[2] Budget summary\n[x] Back\n";
const SORT_MENU: &str = "\n[q] Sort by date added\n[w] Sort by price\n[e] Sort by name\n[x] Back\n";
const BUDGET_SUMMARY_MENU: &str = "[v] View budget details\n[x] Back\n";

impl<R: BufRead, W: Write> MenuController<'_, R, W> {
    pub(super) fn summary_menu(&mut self) -> LilipatResult<()> {
        loop {
            self.prompt.say(SUMMARY_MENU)?;
            let result = match self.prompt.choice("\nEnter choice: ")? {
                Some('1') => self.summarize_items(),
                Some('2') => self.summarize_budgets(),
                Some('x') | Some('X') => return Ok(()),
                _ => self.prompt.say("Invalid choice. Please try again.\n"),
            };
            self.settle(result)?;
        }
    }

    /// Item listing with re-sort shortcuts; each press flips the direction
    fn summarize_items(&mut self) -> LilipatResult<()> {
        let service = CatalogService::new(self.storage);
        let mut order = SortOrder::default();

        loop {
            let items = service.list_sorted(order)?;
            self.prompt
                .say(&format!("\n{}", format_item_list(&items, order, self.settings)))?;
            self.prompt.say(SORT_MENU)?;

            match self.prompt.choice("Enter choice: ")? {
                Some('x') | Some('X') => return Ok(()),
                Some(c) => match SortKey::from_shortcut(c) {
                    Some(key) => order.select(key),
                    None => self.prompt.say("Invalid choice. Please try again.\n")?,
                },
                None => self.prompt.say("Invalid choice. Please try again.\n")?,
            }
        }
    }

    fn summarize_budgets(&mut self) -> LilipatResult<()> {
        let service = BudgetService::new(self.storage);

        loop {
            let budgets = service.list_budgets()?;
            self.prompt
                .say(&format!("\n{}", format_budget_summary(&budgets, self.settings)))?;
            self.prompt.say(BUDGET_SUMMARY_MENU)?;

            match self.prompt.choice("Enter choice: ")? {
                Some('v') | Some('V') => {
                    let result = self.budget_details(&service);
                    self.settle(result)?;
                }
                Some('x') | Some('X') => return Ok(()),
                _ => self.prompt.say("Invalid choice. Please try again.\n")?,
            }
        }
    }

    fn budget_details(&mut self, service: &BudgetService<'_>) -> LilipatResult<()> {
        let month = Month::parse(&self.prompt.line("Enter month to view details (1-12): ")?)?;
        let view = service.view_budget(month)?;
        self.prompt
            .say(&format!("\n{}", format_budget_details(&view, self.settings)))
    }
}
