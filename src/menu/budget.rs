//! Budget submenu: set, view and remove monthly budgets

use std::io::{BufRead, Write};

use crate::display::{format_budget_choices, format_budget_details, format_unbudgeted_list};
use crate::error::{LilipatError, LilipatResult};
use crate::models::Month;
use crate::services::BudgetService;

use super::items::parse_amount;
use super::MenuController;

const BUDGET_MENU: &str = "\nBudget Menu\n[1] Set budget\n[2] View budget\n[3] Remove month from budget\n[x] Back\n";

impl<R: BufRead, W: Write> MenuController<'_, R, W> {
    pub(super) fn budget_menu(&mut self) -> LilipatResult<()> {
        loop {
            self.prompt.say(BUDGET_MENU)?;
            let result = match self.prompt.choice("\nEnter choice: ")? {
                Some('1') => self.set_budget(),
                Some('2') => self.view_budget(),
                Some('3') => self.remove_budget(),
                Some('x') | Some('X') => return Ok(()),
                _ => self.prompt.say("Invalid choice. Please try again.\n"),
            };
            self.settle(result)?;
        }
    }

    /// Create a month's budget, then offer unbudgeted items until done
    fn set_budget(&mut self) -> LilipatResult<()> {
        let service = BudgetService::new(self.storage);
        service.ensure_capacity()?;

        let month = Month::parse(&self.prompt.line("Enter month (1-12): ")?)?;
        service.ensure_month_free(month)?;

        let total = parse_amount(&self.prompt.line(&format!("Enter budget for {}: ", month))?)?;
        let mut budget = service.set_budget(month, total)?;

        loop {
            let pool = service.unbudgeted_items()?;
            self.prompt
                .say(&format!("\n{}", format_unbudgeted_list(&pool, self.settings)))?;
            if pool.is_empty() {
                break;
            }

            self.prompt.say(&format!(
                "Remaining: {}\n",
                budget.remaining.format_with_symbol(&self.settings.currency_symbol)
            ))?;
            let selection = self.prompt.line(&format!(
                "Select item to add to {}'s budget (or 0 to finish): ",
                month
            ))?;

            match selection.parse::<usize>() {
                Ok(0) => break,
                Ok(n) if n <= pool.len() => match service.assign_item(month, pool[n - 1].id) {
                    Ok(updated) => {
                        budget = updated;
                        self.prompt.say("Item added to budget!\n")?;
                    }
                    Err(LilipatError::InsufficientFunds { .. }) => {
                        self.prompt.say("Not enough budget for this item.\n")?;
                    }
                    Err(e) => return Err(e),
                },
                _ => self.prompt.say("Invalid choice, try again.\n")?,
            }
        }

        self.prompt.say("Budget set successfully!\n")
    }

    fn view_budget(&mut self) -> LilipatResult<()> {
        let service = BudgetService::new(self.storage);
        if service.list_budgets()?.is_empty() {
            return self.prompt.say("No budgets set yet.\n");
        }

        let month = Month::parse(&self.prompt.line("Enter month to view budget (1-12): ")?)?;
        let view = service.view_budget(month)?;
        self.prompt
            .say(&format!("\n{}", format_budget_details(&view, self.settings)))
    }

    fn remove_budget(&mut self) -> LilipatResult<()> {
        let service = BudgetService::new(self.storage);
        let budgets = service.list_budgets()?;
        if budgets.is_empty() {
            return self.prompt.say("No budgets to remove.\n");
        }

        self.prompt.say(&format!(
            "\nAvailable budgets to remove:\n{}",
            format_budget_choices(&budgets)
        ))?;
        let selection = self
            .prompt
            .line("Select a budget to remove (or 0 to cancel): ")?;

        let month = match selection.parse::<usize>() {
            Ok(0) => return Ok(()),
            Ok(n) if n <= budgets.len() => budgets[n - 1].month,
            _ => {
                return Err(LilipatError::out_of_range(selection.as_str(), 1, budgets.len()));
            }
        };

        let removed = service.remove_budget(month)?;
        self.prompt.say(&format!(
            "Budget removed successfully! {} item/s returned to the unbudgeted list.\n",
            removed.released_items
        ))
    }
}
