//! Input validation for new items
//!
//! The URL check is a shape heuristic, not a parser: a scheme prefix plus one
//! of three domain substrings anywhere in the text.

use crate::models::Category;

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];
const URL_DOMAIN_MARKERS: [&str; 3] = [".com", ".org", ".net"];

/// Check whether a purchase link looks usable
pub fn is_valid_url(url: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
        && URL_DOMAIN_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Check whether text names one of the fixed categories (case-sensitive)
pub fn is_valid_category(category: &str) -> bool {
    category.parse::<Category>().is_ok()
}
