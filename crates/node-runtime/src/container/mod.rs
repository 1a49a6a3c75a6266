//! # Subsystem Container
//!
//! Configuration plus the subsystem instances built from it.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig, SecurityConfig, DEVELOPMENT_SECRET};
pub use subsystems::{ContainerError, SubsystemContainer};
