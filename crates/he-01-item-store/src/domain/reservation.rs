//! Reservation handle.
//!
//! A `Reservation` is the capability to complete exactly one identifier. It
//! carries the store it was allocated from, so whoever holds it (a queued
//! work unit) can finish the item without re-deriving store access.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::ItemId;
use crate::domain::errors::StoreError;
use crate::ports::ItemStore;

/// Handle for a reserved, not yet completed identifier.
pub struct Reservation {
    id: ItemId,
    store: Arc<dyn ItemStore>,
}

impl Reservation {
    /// Reserve the next identifier in `store`.
    pub fn acquire(store: &Arc<dyn ItemStore>) -> Self {
        let id = store.reserve();
        Self {
            id,
            store: Arc::clone(store),
        }
    }

    /// The reserved identifier
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Complete the reservation with `value`.
    ///
    /// Consumes the handle, so a reservation can be completed at most once.
    pub fn persist(self, value: String) -> Result<(), StoreError> {
        self.store.persist(self.id, value)
    }
}

impl fmt::Debug for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reservation").field("id", &self.id).finish()
    }
}
