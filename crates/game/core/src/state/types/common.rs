//! Shared primitive types used across the state tree.

use serde::{Deserialize, Serialize};

/// Absolute wall-clock instant, stored as Unix epoch milliseconds.
///
/// Serialized as a plain integer so saves round-trip exactly regardless of
/// locale or platform.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, floored at zero.
    pub fn since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).max(0)
    }

    pub fn add_hours(self, hours: i64) -> Self {
        Self(self.0 + hours * 60 * 60 * 1000)
    }
}

/// Unique identifier for an owned or market item.
///
/// Allocated sequentially from [`crate::state::GameState::allocate_item_id`];
/// never reused within a save.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
