//! LLM provider client port.
//!
//! The rewrite pipeline and the model lister only need one capability from
//! the network: send a request, get the body of a 2xx response back. The
//! implementation lives in `pirate-provider`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{AuthHeader, OutboundChatRequest};

/// HTTP method of an outbound provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMethod {
    Get,
    Post,
}

impl ProviderMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A single outbound call to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub method: ProviderMethod,
    pub url: String,
    pub auth: AuthHeader,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl ProviderRequest {
    /// `GET` with no body.
    pub fn get(url: impl Into<String>, auth: AuthHeader, timeout: Duration) -> Self {
        Self {
            method: ProviderMethod::Get,
            url: url.into(),
            auth,
            body: None,
            timeout,
        }
    }

    /// `POST` of a chat-completion body.
    pub fn chat(outbound: OutboundChatRequest, timeout: Duration) -> Self {
        Self {
            method: ProviderMethod::Post,
            body: Some(outbound.body.to_json()),
            url: outbound.url,
            auth: outbound.auth,
            timeout,
        }
    }

    /// Headers to send: content type first, then auth.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", "application/json".to_string()),
            (self.auth.name(), self.auth.value()),
        ]
    }
}

/// Errors from provider calls.
///
/// Network failures, timeouts, and non-2xx statuses are all one failure class
/// to callers; the variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Connection, TLS, DNS, or body read failure.
    #[error("{message}")]
    Network { message: String },

    /// The call exceeded its timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status} for url: {url}")]
    Status { status: u16, url: String },
}

/// Result type alias for provider port operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Port trait for the downstream LLM provider.
#[async_trait]
pub trait LlmProviderPort: Send + Sync {
    /// Send `request` and return the body of a 2xx response as text.
    async fn send(&self, request: ProviderRequest) -> ProviderResult<String>;
}
