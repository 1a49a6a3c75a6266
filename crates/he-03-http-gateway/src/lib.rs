//! HE-03 HTTP Gateway - REST boundary in front of the processing service.
//!
//! # Routes
//!
//! | Route | Method | Success | Errors |
//! |-------|--------|---------|--------|
//! | `/hash` | POST | 201, JSON id, `Location: /hash/{id}` | 422 missing `password`, 503 shutting down |
//! | `/hash/{id}` | GET | 200, JSON digest | 404 unknown or pending, 422 bad id |
//! | `/stats` | GET | 200, `{"total": N, "average": ms}` | |
//! | `/shutdown` | POST | 204, then shutdown is triggered | |
//!
//! Unknown paths answer 404 and known paths with the wrong method answer 405,
//! both with a `{"message": ...}` body. Bodies larger than the configured
//! limit are rejected with 413 before reaching a handler.
//!
//! # Usage
//!
//! ```ignore
//! use he_03_http_gateway::{shutdown_channel, GatewayConfig, HashGatewayService};
//!
//! let (trigger, listener) = shutdown_channel();
//! let gateway = HashGatewayService::new(GatewayConfig::default(), processing, trigger)?;
//! let tcp = gateway.bind().await?;
//! gateway.serve(tcp, listener.wait()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod service;
pub mod shutdown;

// Re-exports for public API
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, ApiErrorKind, ApiResult, GatewayError};
pub use domain::types::{MessageResult, PasswordForm, StatsResponse};
pub use service::HashGatewayService;
pub use shutdown::{shutdown_channel, ShutdownListener, ShutdownTrigger};
