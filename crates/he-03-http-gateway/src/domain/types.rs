//! Request and response bodies.

use he_02_processing::ProcessingStats;
use serde::{Deserialize, Serialize};

/// `password` field of `POST /hash`, from the form body or the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    pub password: Option<String>,
}

impl PasswordForm {
    /// The password, if present and non-empty
    pub fn into_password(self) -> Option<String> {
        self.password.filter(|p| !p.is_empty())
    }
}

/// Body of `GET /stats`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Completed items
    pub total: u64,
    /// Mean hash time in milliseconds
    pub average: f64,
}

impl From<ProcessingStats> for StatsResponse {
    fn from(stats: ProcessingStats) -> Self {
        Self {
            total: stats.count,
            average: stats.average_process_millis,
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResult {
    pub message: String,
}
