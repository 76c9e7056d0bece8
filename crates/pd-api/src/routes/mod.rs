//! API route definitions and router builder.

pub mod health;
pub mod info;
pub mod welcome;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::not_found;
use crate::state::AppState;
use pd_protocol::routes;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::ROOT, get(welcome::welcome))
        .route(routes::HEALTH, get(health::health))
        .route(routes::INFO, get(info::info))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
