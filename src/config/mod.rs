//! Configuration module for lilipat
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Display settings

pub mod paths;
pub mod settings;

pub use paths::LilipatPaths;
pub use settings::Settings;
