//! # Hash Encoder Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (digest, store, pipeline)
//! └── src/integration/  # Cross-crate flows
//!     ├── flows.rs      # Digest → Store → Processing
//!     └── http_flows.rs # Full stack through the axum router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p he-tests
//!
//! # By category
//! cargo test -p he-tests integration::flows
//! cargo test -p he-tests integration::http_flows
//!
//! # Benchmarks
//! cargo bench -p he-tests
//! ```

pub mod integration;
