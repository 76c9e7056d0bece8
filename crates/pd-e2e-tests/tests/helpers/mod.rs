//! Shared test harness for E2E integration tests.
//!
//! Runs the real API on an ephemeral port so the dashboard client talks to
//! it over TCP, and exposes the in-process router for `oneshot` checks.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use pd_api::routes::build_router;
use pd_api::server;
use pd_api::state::AppState;
use pd_dashboard::ApiClient;
use pd_dashboard::config::DashboardConfig;

/// `GET uri` against an in-process router. Returns (status, JSON body).
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// In-process router with the given environment.
pub fn router(environment: &str) -> Router {
    build_router(AppState::new(environment))
}

/// A live API server bound to 127.0.0.1 on an ephemeral port.
pub struct LiveServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl LiveServer {
    pub async fn start(environment: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(listener, AppState::new(environment), async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Dashboard client pointed at this server.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&DashboardConfig {
            api_url: self.base_url(),
            refresh_interval_secs: 1,
            timeout_secs: 2,
        })
        .unwrap()
    }

    /// Signal shutdown and wait for the server to drain.
    pub async fn stop(mut self) -> std::io::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap()
    }
}
