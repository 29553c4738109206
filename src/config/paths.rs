//! Path management for lilipat
//!
//! Everything lives under one base directory: the platform config directory
//! joined with `lilipat` (`~/.config/lilipat` on Linux, `%APPDATA%\lilipat`
//! on Windows). Tests point [`LilipatPaths::with_base_dir`] at a temp dir.

use std::path::PathBuf;

use crate::error::LilipatError;

/// Manages all paths used by lilipat
#[derive(Debug, Clone)]
pub struct LilipatPaths {
    /// Base directory for all lilipat data
    base_dir: PathBuf,
}

impl LilipatPaths {
    /// Resolve the platform base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, LilipatError> {
        let dirs = directories::BaseDirs::new().ok_or_else(|| {
            LilipatError::Config("Could not determine the user config directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.config_dir().join("lilipat"),
        })
    }

    /// Create LilipatPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the persisted item list
    pub fn items_file(&self) -> PathBuf {
        self.base_dir.join("items.csv")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("lilipat.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LilipatError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LilipatError::Io(format!("Failed to create data directory: {}", e)))
    }
}
