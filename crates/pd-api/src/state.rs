//! Shared application state for the Axum server.
//!
//! Everything here is fixed at startup; handlers only read it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pd_protocol::DEFAULT_ENVIRONMENT;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Monotonic process start, the reference point for reported uptime.
    pub started_at: Instant,
    /// Deployment environment reported by `GET /`.
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(environment: &str) -> Self {
        Self {
            started_at: Instant::now(),
            environment: Arc::from(environment),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}
