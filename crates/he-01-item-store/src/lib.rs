//! # HE-01 Item Store
//!
//! Identifier reservation and write-once storage for computed digests.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): `ItemId`, `ItemState`, `Reservation`, `StoreError`
//! - **Ports Layer** (`ports/`): `ItemStore`, the pluggable storage contract
//! - **Adapters Layer** (`adapters/`): `MemoryItemStore`, the volatile reference backend
//!
//! ## Invariants
//!
//! - Identifiers start at 1, increase by 1, and are never reused
//! - A value, once written for an identifier, is never overwritten
//! - "Never reserved" and "reserved but not completed" both read as `NotFound`
//!
//! ## Usage
//!
//! ```ignore
//! use he_01_item_store::{new_item_store, Reservation, StorageConfig};
//!
//! let store = new_item_store(&StorageConfig::default());
//! let reservation = Reservation::acquire(&store);
//! let id = reservation.id();
//! reservation.persist("digest".to_string())?;
//! assert_eq!(store.get(id)?, "digest");
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;

use std::sync::Arc;

use tracing::{info, warn};

// Re-exports for convenience
pub use adapters::MemoryItemStore;
pub use domain::{
    ItemId, ItemState, Reservation, StorageConfig, StorageSettings, StorageType, StoreError,
};
pub use ports::ItemStore;

/// Build the storage backend named by `config`.
///
/// Unknown backend names fall back to the in-memory store.
pub fn new_item_store(config: &StorageConfig) -> Arc<dyn ItemStore> {
    let storage_type = StorageType::parse(&config.storage_type).unwrap_or_else(|| {
        warn!(
            requested = %config.storage_type,
            "[he-01] Unknown storage type, falling back to memory"
        );
        StorageType::Memory
    });

    info!(backend = storage_type.as_str(), "[he-01] Item store initialized");
    match storage_type {
        StorageType::Memory => Arc::new(MemoryItemStore::new()),
    }
}
