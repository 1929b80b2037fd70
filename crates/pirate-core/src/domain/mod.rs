//! Domain types for the pirate rewrite adapter.
//!
//! These types are request-scoped and independent of any HTTP framework.

mod chat;
mod http;
mod provider;
mod task;

pub use chat::{
    ChatChoice, ChatCompletionRequest, ChatMessage, ChatResponse, MessageRole,
    OutboundChatRequest, PIRATE_PROMPT_PREFIX, pirate_prompt,
};
pub use http::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN, IncomingRequest, OutgoingResponse,
    TEXT_PLAIN_UTF8, cors_headers,
};
pub use provider::{
    AuthHeader, ProviderKind, auth_header_for, classify_provider, models_url, resolve_chat_url,
};
pub use task::{PayloadError, TaskPayload};
