//! Crypto error types.

use thiserror::Error;

/// Digest construction and generation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Secret key is below the minimum strength requirement
    #[error("secret is invalid, it should be at least {min} characters (got {actual})")]
    WeakKey {
        /// Minimum key length in bytes
        min: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// The MAC could not be computed or encoded
    #[error("digest encoding failed: {0}")]
    Encoding(String),
}
