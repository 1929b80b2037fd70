//! `reqwest` implementation of the [`LlmProviderPort`](pirate_core::LlmProviderPort).
//!
//! One pooled [`reqwest::Client`] is shared by every call; the per-call
//! timeout comes from the [`ProviderRequest`](pirate_core::ProviderRequest).

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; both are used by tests/
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;

mod config;
mod error;
mod http;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use http::ReqwestProvider;

// Configuration
pub use config::ProviderClientConfig;
