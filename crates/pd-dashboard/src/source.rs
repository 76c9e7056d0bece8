//! Status source abstraction.
//!
//! `StatusSource` trait with one method per API endpoint. Two impls:
//! - `ApiClient` — HTTP via `reqwest` (in `client.rs`)
//! - `MockStatusSource` — scripted, in-memory (in `mock.rs`)

use async_trait::async_trait;

use crate::error::ClientResult;
use pd_protocol::{HealthStatus, ServiceInfo, WelcomeInfo};

/// Anything the dashboard can read service status from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// `GET /`
    async fn welcome(&self) -> ClientResult<WelcomeInfo>;

    /// `GET /health`
    async fn health(&self) -> ClientResult<HealthStatus>;

    /// `GET /api/info`
    async fn info(&self) -> ClientResult<ServiceInfo>;
}
