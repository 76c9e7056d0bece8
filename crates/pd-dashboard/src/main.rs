//! Pipeline demo dashboard: polls the API and redraws a terminal view.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use pd_dashboard::config::DashboardConfig;
use pd_dashboard::shutdown::shutdown_signal;
use pd_dashboard::{ApiClient, ViewState, poller, render};

/// Clear the terminal and draw the current view.
fn draw(view: &ViewState) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write!(stdout, "\x1b[2J\x1b[H{}", render(view)).and_then(|()| stdout.flush()) {
        tracing::warn!(error = %e, "failed to draw dashboard");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the dashboard itself.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "pd-dashboard starting"
    );

    let config = DashboardConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    tracing::info!(
        api_url = %client.base_url(),
        refresh_secs = config.refresh_interval_secs,
        "config loaded"
    );

    let state = ViewState::shared();
    poller::load_initial(&client, &state).await;
    draw(&*state.read().await);

    tokio::select! {
        () = poller::run(&client, &state, config.refresh_interval(), draw) => {
            tracing::error!("refresh loop exited unexpectedly");
        }
        () = shutdown_signal() => {}
    }

    tracing::info!("pd-dashboard stopped");
    Ok(())
}
