//! Health check endpoint.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;
use pd_protocol::HealthStatus;

/// GET /health — liveness check with uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let status = HealthStatus::with_uptime(state.uptime());
    tracing::trace!(uptime = status.uptime, "health check");
    Json(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn uptime_counts_from_start() {
        let state = AppState::new("test");
        tokio::time::sleep(Duration::from_millis(50)).await;

        let Json(status) = health(State(state)).await;
        assert!(status.is_healthy());
        assert!(status.uptime >= 0.05);
        assert!(status.uptime < 30.0);
    }
}
