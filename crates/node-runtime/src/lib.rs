//! # Node Runtime Library
//!
//! Configuration loading, subsystem wiring and the process lifecycle for
//! the hash encoder. The executable entry point is `main.rs`.
//!
//! ## Modules
//!
//! - `container/` - configuration and the subsystem container
//! - `runtime` - gateway wiring, signal handling, graceful shutdown
//! - `cli` - command-line flags

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod container;
pub mod runtime;

pub use cli::CliArgs;
pub use container::{ConfigError, NodeConfig, SubsystemContainer};
pub use runtime::NodeRuntime;
