//! Domain Layer
//!
//! Identifiers, item lifecycle, the reservation handle and store errors.
//! No I/O and no locking lives here.

pub mod config;
pub mod entities;
pub mod errors;
pub mod reservation;

pub use config::{StorageConfig, StorageSettings, StorageType};
pub use entities::{ItemId, ItemState};
pub use errors::StoreError;
pub use reservation::Reservation;
