//! Request paths served by the demo API.
//!
//! ```text
//! /           welcome message
//! /health     liveness + uptime
//! /api/info   deployment summary
//! ```

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const INFO: &str = "/api/info";

/// Join a base URL and a route path without doubling the slash.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
