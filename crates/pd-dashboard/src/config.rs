//! Dashboard configuration, loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Top-level configuration for the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the API (DASHBOARD_API_URL).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Health refresh period in seconds (DASHBOARD_REFRESH_SECS).
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Per-request timeout in seconds (DASHBOARD_TIMEOUT_SECS).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000".into()
}
fn default_refresh_interval() -> u64 {
    5
}
fn default_timeout_secs() -> u64 {
    5
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup. Empty values count
    /// as unset; intervals must be at least one second.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let secs = |var: &'static str, default: u64| -> Result<u64, ConfigError> {
            let Some(raw) = get(var) else {
                return Ok(default);
            };
            match raw.trim().parse::<u64>() {
                Ok(0) => Err(ConfigError::Invalid {
                    var,
                    value: raw,
                    reason: "must be at least 1".into(),
                }),
                Ok(n) => Ok(n),
                Err(e) => Err(ConfigError::Invalid {
                    var,
                    value: raw,
                    reason: e.to_string(),
                }),
            }
        };

        Ok(Self {
            api_url: get("DASHBOARD_API_URL").unwrap_or_else(default_api_url),
            refresh_interval_secs: secs("DASHBOARD_REFRESH_SECS", default_refresh_interval())?,
            timeout_secs: secs("DASHBOARD_TIMEOUT_SECS", default_timeout_secs())?,
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            refresh_interval_secs: default_refresh_interval(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
