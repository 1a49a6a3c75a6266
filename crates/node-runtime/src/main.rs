//! # Hash Encoder
//!
//! Accepts secrets over HTTP, hashes them on a worker pool after a settle
//! delay, and serves the digests and timing statistics.
//!
//! ## Startup Sequence
//!
//! 1. Parse flags, install telemetry
//! 2. Load configuration (defaults, file, environment, flags)
//! 3. Build subsystems (a weak master secret is fatal here)
//! 4. Bind the listener and serve until `/shutdown` or a signal

use anyhow::{Context, Result};
use clap::Parser;
use he_telemetry::{init_telemetry, TelemetryConfig};
use node_runtime::{CliArgs, NodeConfig, NodeRuntime};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let mut config =
        NodeConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    info!("===========================================");
    info!("  Hash Encoder v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let runtime = NodeRuntime::new(config)?;
    let listener = runtime.bind().await?;

    runtime.run(listener).await
}
