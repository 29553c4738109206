//! Diagnostic logging
//!
//! The menu owns stdout, so `tracing` output goes to `lilipat.log` in the
//! data directory, or to stderr at `warn` when that file cannot be opened.

use std::fs;

use anyhow::Result;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::paths::LilipatPaths;

/// Filter used for the log file
pub const FILE_FILTER: &str = "info,lilipat=debug";

/// Initialize structured logging to `lilipat.log` in the data directory.
pub fn init_logging(paths: &LilipatPaths) -> Result<()> {
    paths.ensure_directories()?;
    let log_file_path = paths.log_file();

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let writer = BoxMakeWriter::new(std::sync::Mutex::new(file));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(FILE_FILTER))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!("lilipat logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Fallback when the log file cannot be opened: warnings and errors to stderr
pub fn init_logging_stderr() {
    // A subscriber may already be installed; keep whichever came first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
