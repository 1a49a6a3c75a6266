//! Error types for the Processing Service

use he_01_item_store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::ProcessingService`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// Item Store error, passed through unchanged (`NotFound` on retrieve)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The service has been terminated and no longer accepts work
    #[error("processing service is shutting down")]
    ShuttingDown,

    /// Configuration rejected at startup
    #[error("invalid processing configuration: {0}")]
    InvalidConfig(String),
}

impl ProcessingError {
    /// Whether this is the expected "no value (yet)" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProcessingError::Store(StoreError::NotFound(_)))
    }
}
