use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to AWS CI/CD Pipeline Demo";

/// Release version reported by `GET /`. Tracked separately from the crate
/// version so the public contract stays stable across internal releases.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Environment reported when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeInfo {
    pub message: String,
    pub version: String,
    /// Deployment environment, e.g. "development" or "production".
    pub environment: String,
}

impl WelcomeInfo {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            version: SERVICE_VERSION.to_string(),
            environment: environment.into(),
        }
    }
}
