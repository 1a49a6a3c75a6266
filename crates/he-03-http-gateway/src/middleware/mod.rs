//! Middleware stack for the HTTP Gateway.
//!
//! Layer order: Request → Tracing → BodyLimit → Handler

pub mod tracing;

pub use tracing::TracingLayer;
