use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service health. The process only answers while it is up, so there is a
/// single state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthState::Healthy => write!(f, "healthy"),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    /// Time the response was built (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started.
    pub uptime: f64,
}

impl HealthStatus {
    /// Snapshot for a process that has been running for `uptime`.
    pub fn with_uptime(uptime: Duration) -> Self {
        Self {
            status: HealthState::Healthy,
            timestamp: Utc::now(),
            uptime: uptime.as_secs_f64(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthState::Healthy
    }
}
