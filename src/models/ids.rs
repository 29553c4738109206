//! Item identity
//!
//! Items are keyed by a small random integer in [1, 1_000_000]. Equality is
//! plain integer comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Smallest generated item id
pub const MIN_ITEM_ID: u32 = 1;

/// Largest generated item id
pub const MAX_ITEM_ID: u32 = 1_000_000;

/// How many candidate ids to draw before giving up on a free one
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Identifier of an item in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Create a new random ID in [1, 1_000_000]
    ///
    /// Not collision-checked; callers that need uniqueness retry against
    /// the ids already in use.
    pub fn random() -> Self {
        let bits = Uuid::new_v4().as_u128();
        let span = (MAX_ITEM_ID - MIN_ITEM_ID + 1) as u128;
        Self(MIN_ITEM_ID + (bits % span) as u32)
    }

    /// Create an ID from a raw value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Draw ids from `source` until one is not `taken`
///
/// Returns `None` after [`MAX_ID_ATTEMPTS`] draws that were all in use.
pub fn pick_unused_id(
    mut source: impl FnMut() -> ItemId,
    taken: impl Fn(ItemId) -> bool,
) -> Option<ItemId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = source();
        if !taken(id) {
            return Some(id);
        }
        tracing::debug!(%id, "item id collision, retrying");
    }
    None
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
