//! Mock status source for testing.
//!
//! Serves canned payloads without a network, counts health requests, and
//! can be switched into a failing mode to exercise the "keep prior state"
//! path. Health latency is adjustable for timer tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::source::StatusSource;
use pd_protocol::{HealthStatus, ServiceInfo, WelcomeInfo};

pub struct MockStatusSource {
    environment: String,
    failing: AtomicBool,
    health_calls: AtomicU64,
    health_latency_ms: AtomicU64,
}

impl MockStatusSource {
    /// A healthy source reporting the given environment.
    pub fn new(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            failing: AtomicBool::new(false),
            health_calls: AtomicU64::new(0),
            health_latency_ms: AtomicU64::new(0),
        }
    }

    /// A source whose every request fails.
    pub fn failing() -> Self {
        let source = Self::new("development");
        source.set_failing(true);
        source
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delay applied to health requests started from now on.
    pub fn set_health_latency(&self, latency: Duration) {
        self.health_latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of health requests answered so far, failed ones included.
    pub fn health_calls(&self) -> u64 {
        self.health_calls.load(Ordering::SeqCst)
    }

    fn check(&self, endpoint: &str) -> ClientResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Unavailable(format!("mock {endpoint} unavailable")));
        }
        Ok(())
    }
}

impl Default for MockStatusSource {
    fn default() -> Self {
        Self::new("development")
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn welcome(&self) -> ClientResult<WelcomeInfo> {
        self.check("welcome")?;
        Ok(WelcomeInfo::new(self.environment.as_str()))
    }

    /// Each answered call reports one more second of uptime.
    async fn health(&self) -> ClientResult<HealthStatus> {
        let n = self.health_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let latency = self.health_latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        self.check("health")?;
        Ok(HealthStatus::with_uptime(Duration::from_secs(n)))
    }

    async fn info(&self) -> ClientResult<ServiceInfo> {
        self.check("info")?;
        Ok(ServiceInfo::pipeline_demo())
    }
}
