//! Error taxonomy of the rewrite pipeline.
//!
//! Every variant maps to one HTTP status and a plain-text body. The `Display`
//! text of each error *is* that body.

use thiserror::Error;

use crate::domain::PayloadError;
use crate::ports::ProviderError;

/// Problems with a 2xx provider response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseFormatError {
    /// The body was not JSON.
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON without a recognized choice shape.
    #[error("Unexpected API response format. See logs for details.")]
    Unrecognized,
}

/// Terminal failure of one rewrite invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Bad or incomplete request body.
    #[error(transparent)]
    MalformedRequest(#[from] PayloadError),

    /// Endpoint or API key not configured.
    #[error("Azure Foundry credentials not set")]
    ConfigurationMissing,

    /// Network error, timeout, or non-2xx from the provider.
    #[error("Error calling Azure OpenAI: {0}")]
    UpstreamCallFailure(#[from] ProviderError),

    /// The provider's response could not be used.
    #[error(transparent)]
    UpstreamResponseMalformed(#[from] ResponseFormatError),
}

impl RewriteError {
    /// HTTP status code reported for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) => 400,
            Self::ConfigurationMissing | Self::UpstreamCallFailure(_) => 500,
            Self::UpstreamResponseMalformed(_) => 502,
        }
    }
}
