//! # HE-02 Processing Service
//!
//! Bounded work queue and worker pool that turn submitted inputs into stored
//! digests after a configurable write delay.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `ProcessingConfig`, `WorkUnit`, `TimingRecorder`, errors
//! - **Ports Layer** (`ports/`): `HashProcessingApi`, driven by the HTTP gateway
//! - **Service** (`service.rs`): `ProcessingService`, the queue and pool owner
//!
//! ## Flow
//!
//! ```text
//! submit(input) ──reserve id──→ [bounded queue] ──→ worker
//!                                                    │ sleep(write_delay)
//!                                                    │ digest (timed)
//!                                                    └→ persist(id, digest)
//! ```
//!
//! `submit` returns the identifier as soon as the unit is queued. A full
//! queue makes `submit` wait. `terminate` lets every queued unit finish
//! before the workers exit.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

mod worker;

// Re-exports for convenience
pub use domain::{ProcessingConfig, ProcessingError, ProcessingStats, TimingRecorder};
pub use ports::HashProcessingApi;
pub use service::ProcessingService;
