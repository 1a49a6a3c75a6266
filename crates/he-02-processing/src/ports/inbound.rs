//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use he_01_item_store::ItemId;

use crate::domain::{ProcessingError, ProcessingStats};

/// Primary processing API (Driving Port)
#[async_trait]
pub trait HashProcessingApi: Send + Sync {
    /// Reserve an identifier and queue `input` for hashing.
    ///
    /// Returns as soon as the unit is queued. Waits for queue space when the
    /// queue is full.
    ///
    /// # Errors
    /// * `ShuttingDown` - the service has been terminated
    async fn submit(&self, input: String) -> Result<ItemId, ProcessingError>;

    /// Read the digest stored for `id`.
    ///
    /// # Errors
    /// * `Store(NotFound)` - unknown identifier, or not yet processed
    fn retrieve(&self, id: ItemId) -> Result<String, ProcessingError>;

    /// Completed sample count and mean hash time in milliseconds
    fn stats(&self) -> ProcessingStats;

    /// Drain queued work, stop every worker, and wait for them to exit.
    async fn terminate(&self);
}
