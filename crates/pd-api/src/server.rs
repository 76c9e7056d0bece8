//! Server lifecycle: serve a bound listener until told to stop.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::routes::build_router;
use crate::state::AppState;

/// Serve the API on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires the listener stops accepting connections and the
/// call returns after in-flight requests have completed.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    serve_app(listener, build_router(state), shutdown).await
}

/// Serve an arbitrary router with the same shutdown semantics as [`serve`].
pub async fn serve_app<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
