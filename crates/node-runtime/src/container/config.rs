//! # Node Configuration
//!
//! Unified configuration for all subsystems and runtime parameters.
//!
//! ## Sources (lowest to highest precedence)
//!
//! 1. Built-in defaults
//! 2. JSON config file (`--config <path>`)
//! 3. Environment variables (`HE_*`)
//! 4. Command-line flags (applied by [`crate::cli::CliArgs`])
//!
//! ## Security Requirements
//!
//! - `master_secret` must be at least 32 bytes; checked when the digest
//!   generator is built
//! - The built-in development secret is accepted but logged as a warning

use he_01_item_store::StorageConfig;
use he_02_processing::ProcessingConfig;
use he_03_http_gateway::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Secret used when none is configured. Development only.
pub const DEVELOPMENT_SECRET: &str = "imarealtivelylongandsomewhatsecuresecret";

/// Complete node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeConfig {
    /// Security configuration.
    pub security: SecurityConfig,
    /// HTTP listener configuration.
    pub server: GatewayConfig,
    /// Worker pool configuration.
    pub processing: ProcessingConfig,
    /// Storage backend selection.
    pub storage: StorageConfig,
}

impl NodeConfig {
    /// Defaults, then `path` (if any), then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON config file. Missing sections take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `HE_*` overrides from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("HE_MASTER_SECRET") {
            self.security.master_secret = secret;
        }
        if let Some(host) = lookup("HE_HOST") {
            self.server.host = parse_var("HE_HOST", &host)?;
        }
        if let Some(port) = lookup("HE_PORT") {
            self.server.port = parse_var("HE_PORT", &port)?;
        }
        if let Some(workers) = lookup("HE_WORKER_COUNT") {
            self.processing.worker_count = parse_var("HE_WORKER_COUNT", &workers)?;
        }
        if let Some(capacity) = lookup("HE_QUEUE_CAPACITY") {
            self.processing.queue_capacity = Some(parse_var("HE_QUEUE_CAPACITY", &capacity)?);
        }
        if let Some(delay) = lookup("HE_WRITE_DELAY_SECS") {
            self.processing.write_delay_secs = parse_var("HE_WRITE_DELAY_SECS", &delay)?;
        }
        if let Some(storage) = lookup("HE_STORAGE") {
            self.storage.storage_type = storage;
        }
        Ok(())
    }

    /// Validate the assembled configuration.
    ///
    /// Secret strength is left to `DigestGenerator::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.processing
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.server
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Whether the built-in development secret is in use.
    pub fn uses_development_secret(&self) -> bool {
        self.security.master_secret == DEVELOPMENT_SECRET
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

/// Security configuration.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SecurityConfig {
    /// Key for the keyed digest. At least 32 bytes.
    pub master_secret: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            master_secret: DEVELOPMENT_SECRET.to_string(),
        }
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("master_secret", &"<redacted>")
            .finish()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
