//! Internal error types for provider calls.
//!
//! These errors are internal to `pirate-provider` and are mapped to the core
//! port's [`ProviderError`] at the boundary.

use pirate_core::ProviderError;
use thiserror::Error;

/// Result type alias for internal client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the provider.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The provider returned a non-2xx status.
    #[error("HTTP {status} for url: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The outgoing body could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Map to the port error, keeping the requested URL for timeouts.
    pub fn into_port_error(self, url: &str) -> ProviderError {
        match self {
            Self::Status { status, url } => ProviderError::Status { status, url },
            Self::Http(e) if e.is_timeout() => ProviderError::Timeout {
                url: url.to_string(),
            },
            Self::Http(e) => ProviderError::Network {
                message: e.to_string(),
            },
            Self::Json(e) => ProviderError::Network {
                message: e.to_string(),
            },
        }
    }
}
