//! Dashboard client error types.

use thiserror::Error;

/// Errors from fetching a status endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{0}")]
    Unavailable(String),
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;
