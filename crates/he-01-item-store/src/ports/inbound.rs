//! Inbound Ports (Driving Ports)
//!
//! `ItemStore` is the pluggable storage contract. The in-memory adapter is
//! the reference implementation; durable backends implement the same trait.

use crate::domain::{ItemId, StoreError};

/// Identifier allocation plus write-once value storage.
///
/// Implementations must be safe to share across threads. `reserve` and
/// `persist` are mutually exclusive with respect to the identifier counter
/// and value map; `get` may run concurrently with other `get` calls.
pub trait ItemStore: Send + Sync {
    /// Allocate the next identifier (1, 2, 3, ...) in the Reserved state.
    ///
    /// No two calls ever return the same identifier.
    fn reserve(&self) -> ItemId;

    /// Complete `id` with `value`.
    ///
    /// # Errors
    /// * `UnknownIdentifier` - `id` was never reserved
    ///
    /// Persisting an already completed identifier succeeds and leaves the
    /// stored value untouched.
    fn persist(&self, id: ItemId, value: String) -> Result<(), StoreError>;

    /// Read the value for `id`.
    ///
    /// # Errors
    /// * `NotFound` - `id` was never reserved, or is still Reserved
    fn get(&self, id: ItemId) -> Result<String, StoreError>;
}
