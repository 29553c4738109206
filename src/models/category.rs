//! Item categories
//!
//! A fixed set of ten rooms and kinds. Matching is case-sensitive against
//! the lowercase names users type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an item is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Furniture,
    Electronics,
    Appliances,
    Bedroom,
    Bathroom,
    LivingRoom,
    DiningRoom,
    Office,
    Outdoor,
    Miscellaneous,
}

impl Category {
    /// Get all categories in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Furniture,
            Self::Electronics,
            Self::Appliances,
            Self::Bedroom,
            Self::Bathroom,
            Self::LivingRoom,
            Self::DiningRoom,
            Self::Office,
            Self::Outdoor,
            Self::Miscellaneous,
        ]
    }

    /// The name users type and the item file stores
    pub fn name(&self) -> &'static str {
        match self {
            Self::Furniture => "furniture",
            Self::Electronics => "electronics",
            Self::Appliances => "appliances",
            Self::Bedroom => "bedroom",
            Self::Bathroom => "bathroom",
            Self::LivingRoom => "living room",
            Self::DiningRoom => "dining room",
            Self::Office => "office",
            Self::Outdoor => "outdoor",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

/// Error for text that names no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
