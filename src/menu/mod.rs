//! Interactive text menu
//!
//! The controller reads selections line by line and dispatches to the item,
//! budget and summary submenus. A failed action prints its error and returns
//! to the menu it came from; only closed input or a broken output stream
//! ends the session.

mod budget;
mod items;
pub mod prompt;
mod summary;

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::error::{LilipatError, LilipatResult};
use crate::storage::Storage;

pub use prompt::Prompter;

const MAIN_MENU: &str = "\nMain Menu\n[1] Add item\n[2] Budget items for purchase\n[3] Summarize\n[x] Exit\n";

/// Drives the menu session over a reader/writer pair
pub struct MenuController<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> MenuController<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            prompt: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> LilipatResult<()> {
        self.prompt.say("Welcome to Lilipat!\n")?;

        match self.main_loop() {
            Err(e) if e.is_input_closed() => {
                tracing::debug!("input closed, ending session");
                self.prompt.say("\nExiting program...\n")
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> LilipatResult<()> {
        loop {
            self.prompt.say(MAIN_MENU)?;
            match self.prompt.choice("\nEnter your choice: ")? {
                Some('1') => self.item_menu()?,
                Some('2') => self.budget_menu()?,
                Some('3') => self.summary_menu()?,
                Some('x') | Some('X') => {
                    self.prompt.say("Exiting program...\n")?;
                    return Ok(());
                }
                _ => self.prompt.say("Invalid choice. Please try again.\n")?,
            }
        }
    }

    /// Report a failed action and carry on, unless input has closed
    fn settle(&mut self, result: LilipatResult<()>) -> LilipatResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_input_closed() => Err(e),
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, err: &LilipatError) -> LilipatResult<()> {
        match err {
            LilipatError::Storage(_) => {
                tracing::error!("{}", err);
                self.prompt.say(&format!(
                    "!! {}\n!! The change was NOT saved and nothing was modified.\n",
                    err
                ))
            }
            LilipatError::Io(_) => {
                tracing::error!("{}", err);
                self.prompt.say(&format!("{}\n", err))
            }
            LilipatError::InsufficientFunds { .. } => {
                self.prompt.say("Not enough budget for this item.\n")
            }
            _ => {
                tracing::debug!("action rejected: {}", err);
                self.prompt.say(&format!("{}\n", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LilipatPaths;
    use crate::models::{Money, Month};
    use crate::services::{AddItemInput, BudgetService, CatalogService};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LilipatPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, name: &str, price: &str) {
        CatalogService::new(storage)
            .add_item(AddItemInput {
                name: name.to_string(),
                brand: "Acme".to_string(),
                price: Money::parse(price).unwrap(),
                purchase_link: "https://acme.com/item".to_string(),
                category: "electronics".to_string(),
            })
            .unwrap();
    }

    fn run_session(storage: &Storage, script: &str) -> String {
        run_with(storage, &Settings::default(), script.as_bytes())
    }

    fn run_with(storage: &Storage, settings: &Settings, script: &[u8]) -> String {
        let mut out = Vec::new();
        MenuController::new(storage, settings, Cursor::new(script.to_vec()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_welcome_and_exit() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "X\n");
        assert!(output.starts_with("Welcome to Lilipat!"));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_invalid_main_choice() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "9\nx\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "1\n1\nLamp\n");
        assert!(output.ends_with("\nExiting program...\n"));
        assert_eq!(storage.items.count().unwrap(), 0);
    }

    #[test]
    fn test_add_item_through_menu() {
        let (temp_dir, storage) = create_test_storage();
        let output = run_session(
            &storage,
            "1\n1\nLamp\nAcme\n19.99\nhttps://acme.com/lamp\nelectronics\nx\nx\n",
        );

        assert!(output.contains("Item added successfully! ID: "));
        let items = storage.items.get_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price.cents(), 1999);
        assert!(temp_dir.path().join("items.csv").exists());
    }

    #[test]
    fn test_invalid_category_rejected_without_saving() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(
            &storage,
            "1\n1\nLamp\nAcme\n19.99\nhttps://acme.com/lamp\nGarage\nx\nx\n",
        );

        assert!(output.contains("Invalid category"));
        assert!(!output.contains("Item added successfully!"));
        assert_eq!(storage.items.count().unwrap(), 0);
    }

    #[test]
    fn test_invalid_link_stops_before_category() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "1\n1\nLamp\nAcme\n19.99\nacme.io\nx\nx\n");

        assert!(output.contains("Invalid purchase link"));
        assert!(!output.contains("Enter Category"));
    }

    #[test]
    fn test_remove_item_through_menu() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1");
        add(&storage, "B", "2");
        add(&storage, "C", "3");

        let output = run_session(&storage, "1\n2\n2\nx\nx\n");

        assert!(output.contains("[1] C"));
        assert!(output.contains("Item removed successfully!"));
        let names: Vec<_> = storage
            .items
            .get_all()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_keeps_items() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "A", "1");

        let output = run_session(&storage, "1\n2\n5\nx\nx\n");
        assert!(output.contains("Invalid selection: 5 (expected 1-1)"));
        assert_eq!(storage.items.count().unwrap(), 1);
    }

    #[test]
    fn test_set_budget_with_assignments() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "19.99");
        add(&storage, "Sofa", "600");

        let output = run_session(&storage, "2\n1\n3\n100\n2\n1\n0\nx\nx\n");

        assert!(output.contains("Enter budget for March: "));
        assert!(output.contains("Not enough budget for this item."));
        assert!(output.contains("Item added to budget!"));
        assert!(output.contains("Budget set successfully!"));

        // The listing after an assignment no longer offers the assigned item
        let after = &output[output.find("Item added to budget!").unwrap()..];
        let listing = &after[after.find("Unbudgeted Items:").unwrap()..after.find("Remaining:").unwrap()];
        assert!(listing.contains("[1] Sofa"));
        assert!(!listing.contains("Lamp"));
        assert!(!listing.contains("[2]"));

        let march = Month::new(3).unwrap();
        let budget = storage.budgets.get(march).unwrap().unwrap();
        assert_eq!(budget.remaining.cents(), 8001);
        assert_eq!(budget.item_count(), 1);
        assert_eq!(BudgetService::new(&storage).unbudgeted_items().unwrap()[0].name, "Sofa");
    }

    #[test]
    fn test_set_budget_bad_selection_reprompts() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "5");

        let output = run_session(&storage, "2\n1\n1\n10\nabc\n7\n0\nx\nx\n");
        assert_eq!(output.matches("Invalid choice, try again.").count(), 2);
        assert!(output.contains("Budget set successfully!"));
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .set_budget(Month::new(3).unwrap(), Money::from_cents(1000))
            .unwrap();

        let output = run_session(&storage, "2\n1\n3\nx\nx\n");
        assert!(output.contains("Budget already exists: March"));
        assert!(!output.contains("Enter budget for March"));
    }

    #[test]
    fn test_invalid_month_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "2\n1\n13\nx\nx\n");
        assert!(output.contains("Invalid selection: 13 (expected 1-12)"));
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_remove_budget_releases_items() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "5");
        let service = BudgetService::new(&storage);
        let june = Month::new(6).unwrap();
        service.set_budget(june, Money::from_cents(1000)).unwrap();
        let lamp = storage.items.get_all().unwrap()[0].id;
        service.assign_item(june, lamp).unwrap();

        let output = run_session(&storage, "2\n3\n1\nx\nx\n");

        assert!(output.contains("[1] June"));
        assert!(output.contains("Budget removed successfully!"));
        assert_eq!(storage.budgets.count().unwrap(), 0);
        assert_eq!(service.unbudgeted_items().unwrap().len(), 1);
    }

    #[test]
    fn test_view_budget_without_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_session(&storage, "2\n2\nx\nx\n");
        assert!(output.contains("No budgets set yet."));
    }

    #[test]
    fn test_summary_sort_toggles_direction() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "19.99");
        add(&storage, "Sofa", "600");

        let output = run_session(&storage, "3\n1\nw\nw\nx\nx\nx\n");

        let by_name = output.find("(by name, ascending)").unwrap();
        let desc = output.find("(by price, descending)").unwrap();
        let asc = output.find("(by price, ascending)").unwrap();
        assert!(by_name < desc && desc < asc);
    }

    #[test]
    fn test_budget_summary_and_details() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "19.99");
        let service = BudgetService::new(&storage);
        let june = Month::new(6).unwrap();
        service.set_budget(june, Money::from_cents(5000)).unwrap();
        let lamp = storage.items.get_all().unwrap()[0].id;
        service.assign_item(june, lamp).unwrap();

        let output = run_session(&storage, "3\n2\nv\n6\nx\nx\nx\n");

        assert!(output.contains("Budget Summary:"));
        assert!(output.contains("Budget for June:"));
        assert!(output.contains("- Lamp"));
    }

    #[test]
    fn test_non_utf8_input_is_just_an_invalid_choice() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_with(&storage, &Settings::default(), &[0xff, b'\n', b'x', b'\n']);

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_non_utf8_item_name_is_kept_readable() {
        let (_temp_dir, storage) = create_test_storage();
        let script = b"1\n1\nLamp \xff\nAcme\n5\nhttps://acme.com/lamp\nelectronics\nx\nx\n";
        let output = run_with(&storage, &Settings::default(), script);

        assert!(output.contains("Item added successfully!"));
        assert_eq!(storage.items.get_all().unwrap()[0].name, "Lamp \u{fffd}");
    }

    #[test]
    fn test_unusable_date_format_does_not_crash_summary() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lamp", "19.99");
        let settings = Settings {
            date_format: "%Q".to_string(),
            ..Settings::default()
        };

        let output = run_with(&storage, &settings, b"3\n1\nx\nx\nx\n");
        assert!(output.contains("Added: "));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_io_errors_do_not_claim_unsaved_changes() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut out = Vec::new();
        {
            let mut menu = MenuController::new(&storage, &settings, Cursor::new(Vec::new()), &mut out);
            menu.report(&LilipatError::Io("terminal went away".into())).unwrap();
            menu.report(&LilipatError::Storage("disk full".into())).unwrap();
        }
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("I/O error: terminal went away\n"));
        assert_eq!(output.matches("NOT saved").count(), 1);
        assert!(output.contains("!! Storage error: disk full"));
    }
}
