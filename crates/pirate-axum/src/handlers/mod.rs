//! HTTP handlers.
//!
//! Handlers are thin: convert the request, call a core service, convert the
//! result. No business logic lives here.

pub mod models;
pub mod rewrite;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
