//! Command-line flags. These override every other configuration source.

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::container::NodeConfig;

/// Keyed-digest service: submit secrets, retrieve their digests later
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hash-encoder", version, about)]
pub struct CliArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of hashing workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Seconds to wait before each item is hashed
    #[arg(short, long)]
    pub delay: Option<f64>,
}

impl CliArgs {
    /// Apply the flags that were given to `config`.
    pub fn apply(&self, config: &mut NodeConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.processing.worker_count = workers;
        }
        if let Some(delay) = self.delay {
            config.processing.write_delay_secs = delay;
        }
    }
}
