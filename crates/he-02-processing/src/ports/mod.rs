//! Ports Layer
//!
//! `HashProcessingApi` is what the HTTP boundary drives.

pub mod inbound;

pub use inbound::HashProcessingApi;
