//! Domain types for the HTTP Gateway.
//!
//! Configuration, request/response bodies and error mapping.

pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::GatewayConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult, GatewayError};
pub use types::{MessageResult, PasswordForm, StatsResponse};
