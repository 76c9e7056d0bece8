//! Deployment information endpoint.

use axum::Json;

use pd_protocol::ServiceInfo;

/// GET /api/info — application summary and pipeline services.
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::pipeline_demo())
}
