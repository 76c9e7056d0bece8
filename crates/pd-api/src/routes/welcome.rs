//! Welcome endpoint.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;
use pd_protocol::WelcomeInfo;

/// GET / — service greeting with version and environment.
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeInfo> {
    Json(WelcomeInfo::new(&*state.environment))
}
