//! Calendar months used as budget envelopes
//!
//! The only place month names live; every display path goes through
//! [`Month::name`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LilipatError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month of the year, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Create a month from its 1-based number
    pub fn new(number: u8) -> Result<Self, LilipatError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LilipatError::out_of_range(number.to_string(), 1, 12))
        }
    }

    /// Parse a month number typed by the user
    pub fn parse(s: &str) -> Result<Self, LilipatError> {
        let s = s.trim();
        let number: u8 = s
            .parse()
            .map_err(|_| LilipatError::out_of_range(s, 1, 12))?;
        Self::new(number)
    }

    /// The 1-based month number
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// English month name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Month {
    type Error = LilipatError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}
