//! Display settings for lilipat
//!
//! Fixed in code; there is no settings file. The menu and display layers
//! take a `&Settings` so tests can vary them.

use chrono::format::{Item as FormatItem, StrftimeItems};

/// Currency symbol shown before amounts
pub const CURRENCY_SYMBOL: &str = "$";

/// strftime format for "date added"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// The date format to render with, or [`DATE_FORMAT`] if the configured
    /// one has a specifier chrono cannot format
    pub fn effective_date_format(&self) -> &str {
        let valid = StrftimeItems::new(&self.date_format).all(|item| !matches!(item, FormatItem::Error));
        if valid {
            &self.date_format
        } else {
            DATE_FORMAT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.effective_date_format(), "%Y-%m-%d");
    }

    #[test]
    fn test_custom_date_format_kept() {
        let settings = Settings {
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.effective_date_format(), "%d/%m/%Y");
    }

    #[test]
    fn test_bad_date_format_falls_back() {
        let settings = Settings {
            date_format: "%Q".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.effective_date_format(), DATE_FORMAT);
    }
}
