//! # Shared Crypto - Keyed Digest Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `digest` | HMAC-SHA-512/256 + base64 | Secret digests served by the encoder |
//!
//! ## Security Properties
//!
//! - **HMAC**: keyed construction, secret never leaves the generator
//! - **SHA-512/256**: truncated SHA-512, 256-bit output
//! - **Key strength**: secrets below 32 bytes are refused

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod errors;

// Re-exports
pub use digest::{DigestGenerator, MIN_SECRET_LENGTH};
pub use errors::DigestError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
