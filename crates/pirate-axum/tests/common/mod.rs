//! Shared helpers for the axum integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pirate_axum::{AxumContext, serve};
use pirate_core::ProviderConfig;
use pirate_core::testing::FakeProvider;
use tokio::net::TcpListener;

pub const GENERIC_ENDPOINT: &str = "https://api.example.com/v1/chat/completions";
pub const AZURE_ENDPOINT: &str = "https://res.openai.azure.com/";

/// Provider config with credentials for `endpoint`.
pub fn configured(endpoint: &str) -> ProviderConfig {
    ProviderConfig::new()
        .with_endpoint(endpoint)
        .with_api_key("test-key")
}

/// Context backed by a fake provider.
pub fn fake_context(config: ProviderConfig, provider: &FakeProvider) -> AxumContext {
    AxumContext::new(config, Arc::new(provider.clone()))
}

/// Serve `ctx` on an ephemeral port and return its base URL.
pub async fn spawn_app(ctx: AxumContext) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, ctx, std::future::pending()).await.unwrap();
    });
    format!("http://{addr}")
}
