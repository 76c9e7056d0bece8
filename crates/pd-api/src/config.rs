//! API server configuration.

use serde::Deserialize;
use thiserror::Error;

use pd_protocol::DEFAULT_ENVIRONMENT;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (PORT env var).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment environment name (APP_ENV, falling back to NODE_ENV).
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

impl ApiConfig {
    /// Load config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => default_port(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(default_host),
            port,
            environment: get("APP_ENV")
                .or_else(|| get("NODE_ENV"))
                .unwrap_or_else(default_environment),
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn reads_port_and_environment() {
        let config =
            ApiConfig::from_lookup(lookup(&[("PORT", "8080"), ("APP_ENV", "production")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn node_env_is_fallback() {
        let config = ApiConfig::from_lookup(lookup(&[("NODE_ENV", "staging")])).unwrap();
        assert_eq!(config.environment, "staging");

        let config =
            ApiConfig::from_lookup(lookup(&[("NODE_ENV", "staging"), ("APP_ENV", "production")]))
                .unwrap();
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", " "), ("APP_ENV", "")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn invalid_port_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(ApiConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn deserialize_partial_json() {
        let config: ApiConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.environment, "development");
    }
}
