//! Test doubles for the provider port.
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for other workspace crates' tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{LlmProviderPort, ProviderError, ProviderRequest, ProviderResult};

/// A fake provider that answers with a canned result and records every request.
///
/// Every call gets the same canned result; with none configured the call
/// fails with a network error.
#[derive(Clone, Default)]
pub struct FakeProvider {
    canned: Option<ProviderResult<String>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with `body`.
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            canned: Some(Ok(body.into())),
            ..Self::default()
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            canned: Some(Err(error)),
            ..Self::default()
        }
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProviderPort for FakeProvider {
    async fn send(&self, request: ProviderRequest) -> ProviderResult<String> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.canned.clone().unwrap_or_else(|| {
            Err(ProviderError::Network {
                message: format!("no canned response for {url}"),
            })
        })
    }
}
