//! Ports Layer
//!
//! Defines the storage contract the Processing Service drives.

pub mod inbound;

pub use inbound::ItemStore;
