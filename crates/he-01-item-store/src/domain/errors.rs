//! Error types for the Item Store subsystem

use thiserror::Error;

use crate::domain::entities::ItemId;

/// Errors returned by [`crate::ItemStore`] implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `persist` was called for an identifier that was never reserved
    #[error("item id {0} was never reserved")]
    UnknownIdentifier(ItemId),

    /// No value is available: never reserved, or reserved but not yet completed
    #[error("no item found at {0}")]
    NotFound(ItemId),
}
