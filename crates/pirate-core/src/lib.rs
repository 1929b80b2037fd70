//! Core domain types and port definitions for the pirate rewrite adapter.
//!
//! This crate owns everything that does not depend on a concrete HTTP stack:
//!
//! - [`config`] - provider configuration built once at process start
//! - [`domain`] - request/response entities, provider classification, and
//!   chat-completion payloads
//! - [`ports`] - the [`LlmProviderPort`] trait implemented by `pirate-provider`
//! - [`services`] - the rewrite pipeline and the model lister
//!
//! Adapters (`pirate-axum`, `pirate-cli`) translate their own request types
//! into [`IncomingRequest`] and hand them to [`RewriteService::handle`].

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use config::{
    Credentials, DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_TIMEOUT, ProviderConfig,
};
pub use domain::{
    AuthHeader, ChatChoice, ChatCompletionRequest, ChatMessage, ChatResponse, IncomingRequest,
    MessageRole, OutboundChatRequest, OutgoingResponse, PayloadError, ProviderKind, TaskPayload,
    auth_header_for, classify_provider, models_url, pirate_prompt, resolve_chat_url,
};
pub use error::{ResponseFormatError, RewriteError};
pub use ports::{LlmProviderPort, ProviderError, ProviderMethod, ProviderRequest, ProviderResult};
pub use services::{ModelDescriptor, ModelLister, RewriteService};
