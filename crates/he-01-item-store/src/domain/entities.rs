//! Core entities: identifiers and item lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-visible identifier for a submitted item.
///
/// Allocated by the store starting at 1, strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw identifier value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemState {
    /// Identifier allocated, no value written yet
    Reserved,
    /// Value written; immutable from here on
    Completed(String),
}

impl ItemState {
    /// Whether a value has been written
    pub fn is_completed(&self) -> bool {
        matches!(self, ItemState::Completed(_))
    }

    /// The stored value, if completed
    pub fn value(&self) -> Option<&str> {
        match self {
            ItemState::Reserved => None,
            ItemState::Completed(value) => Some(value),
        }
    }
}
