//! Pipeline demo API: welcome, health and service-info endpoints.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pd_api::config::ApiConfig;
use pd_api::server;
use pd_api::shutdown::shutdown_signal;
use pd_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pd-api starting");

    let config = ApiConfig::from_env()?;
    let state = AppState::new(config.environment.as_str());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, environment = %config.environment, "listening");

    server::serve(listener, state, shutdown_signal()).await?;

    tracing::info!("http server closed");
    Ok(())
}
