//! Adapters Layer
//!
//! Concrete `ItemStore` backends.

pub mod memory;

pub use memory::MemoryItemStore;
