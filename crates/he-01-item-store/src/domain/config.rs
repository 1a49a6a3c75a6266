//! Storage backend selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageType {
    /// Volatile in-memory map
    #[default]
    Memory,
}

impl StorageType {
    /// Parse a backend name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "memory" => Some(StorageType::Memory),
            _ => None,
        }
    }

    /// Canonical backend name
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Memory => "memory",
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend name, e.g. `memory`
    pub storage_type: String,
    /// Connection settings for networked backends
    pub settings: StorageSettings,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::Memory.as_str().to_string(),
            settings: StorageSettings::default(),
        }
    }
}

/// Connection settings for networked backends.
///
/// The in-memory backend ignores these.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
