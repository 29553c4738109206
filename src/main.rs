use anyhow::Result;
use clap::Parser;

use lilipat::config::{paths::LilipatPaths, settings::Settings};
use lilipat::logging::{init_logging, init_logging_stderr};
use lilipat::menu::MenuController;
use lilipat::storage::Storage;

/// Everything happens in the interactive menu; the only flags are clap's
/// `--help` and `--version`.
#[derive(Parser)]
#[command(
    name = "lilipat",
    version,
    about = "Terminal shopping list and monthly purchase budget tracker",
    long_about = "Lilipat keeps a list of things you want to buy and helps you \
                  plan which month to buy them in, one budget per month."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let paths = LilipatPaths::new()?;
    let settings = Settings::default();

    if let Err(e) = init_logging(&paths) {
        init_logging_stderr();
        tracing::warn!("file logging unavailable: {}", e);
    }

    let storage = Storage::new(paths)?;

    match storage.load_all() {
        Ok(summary) => {
            if summary.skipped > 0 {
                eprintln!(
                    "Warning: skipped {} unreadable record(s) in {}",
                    summary.skipped,
                    storage.items.path().display()
                );
            }
            if summary.reassigned > 0 {
                eprintln!(
                    "Warning: {} item(s) shared an id with an earlier item and were given a new one",
                    summary.reassigned
                );
            }
        }
        Err(e) => {
            tracing::error!("failed to load items: {}", e);
            eprintln!("Warning: could not load saved items ({}). Starting with an empty list.", e);
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    MenuController::new(&storage, &settings, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("session ended");
    Ok(())
}
