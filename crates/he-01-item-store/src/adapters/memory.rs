//! In-memory `ItemStore` backed by a read/write lock.
//!
//! Volatile: contents are lost when the process exits.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::{ItemId, ItemState, StoreError};
use crate::ports::ItemStore;

#[derive(Debug, Default)]
struct MemoryState {
    /// Last allocated identifier (0 = none yet)
    last: u64,
    items: HashMap<ItemId, ItemState>,
}

/// Reference `ItemStore`: a map guarded by a single-writer/multi-reader lock.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

impl MemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reserved identifiers (completed or not)
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Whether no identifier has been reserved yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of completed items
    pub fn completed_count(&self) -> usize {
        self.state
            .read()
            .items
            .values()
            .filter(|state| state.is_completed())
            .count()
    }
}

impl ItemStore for MemoryItemStore {
    fn reserve(&self) -> ItemId {
        let mut state = self.state.write();
        state.last += 1;
        let id = ItemId::new(state.last);
        state.items.insert(id, ItemState::Reserved);
        id
    }

    fn persist(&self, id: ItemId, value: String) -> Result<(), StoreError> {
        let mut state = self.state.write();
        match state.items.get_mut(&id) {
            None => Err(StoreError::UnknownIdentifier(id)),
            Some(ItemState::Completed(_)) => {
                debug!(item_id = %id, "[he-01] Item already completed, keeping first value");
                Ok(())
            }
            Some(slot) => {
                *slot = ItemState::Completed(value);
                Ok(())
            }
        }
    }

    fn get(&self, id: ItemId) -> Result<String, StoreError> {
        let state = self.state.read();
        state
            .items
            .get(&id)
            .and_then(ItemState::value)
            .map(str::to_owned)
            .ok_or(StoreError::NotFound(id))
    }
}
