//! Initial load and periodic health refresh.
//!
//! Requests are fire-and-forget: a success overwrites the matching slot in
//! the view, a failure is logged and the previous value stays.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::error::ClientResult;
use crate::source::StatusSource;
use crate::view::{SharedViewState, ViewState};

fn ok_or_log<T>(result: ClientResult<T>, endpoint: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(endpoint, error = %e, "request failed, keeping previous state");
            None
        }
    }
}

/// Issue all three requests concurrently; each result is stored as soon as
/// it arrives.
pub async fn load_initial<S>(source: &S, state: &SharedViewState)
where
    S: StatusSource + ?Sized,
{
    let welcome = async {
        if let Some(welcome) = ok_or_log(source.welcome().await, "welcome") {
            state.write().await.welcome = Some(welcome);
        }
    };
    let health = async {
        refresh_health(source, state).await;
    };
    let info = async {
        if let Some(info) = ok_or_log(source.info().await, "info") {
            state.write().await.info = Some(info);
        }
    };

    tokio::join!(welcome, health, info);
}

/// Fetch health once. Returns whether the stored value was replaced.
pub async fn refresh_health<S>(source: &S, state: &SharedViewState) -> bool
where
    S: StatusSource + ?Sized,
{
    match ok_or_log(source.health().await, "health") {
        Some(health) => {
            tracing::trace!(uptime = health.uptime, "health refreshed");
            state.write().await.health = Some(health);
            true
        }
        None => false,
    }
}

/// Run the refresh loop, re-fetching health every `interval` and calling
/// `on_update` after each successful refresh.
///
/// This function runs forever until the task is cancelled.
pub async fn run<S, F>(source: &S, state: &SharedViewState, interval: Duration, mut on_update: F)
where
    S: StatusSource + ?Sized,
    F: FnMut(&ViewState),
{
    let mut ticker = time::interval(interval);
    // After a stall, resume one period later instead of firing the backlog.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Skip the first tick (fires immediately); the initial load covers it.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        if refresh_health(source, state).await {
            let view = state.read().await;
            on_update(&view);
        }
    }
}
