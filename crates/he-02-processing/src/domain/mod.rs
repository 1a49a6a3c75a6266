//! Domain Layer
//!
//! Configuration, queue messages, timing aggregation and errors for the
//! processing pipeline.

pub mod config;
pub mod errors;
pub mod timing;
pub mod work;

pub use config::ProcessingConfig;
pub use errors::ProcessingError;
pub use timing::{ProcessingStats, TimingRecorder};
pub use work::{WorkMessage, WorkUnit};
