//! The pirate rewrite pipeline.
//!
//! `handle` is a linear pipeline: preflight short-circuit, body parse, field
//! extraction, configuration check, endpoint and auth resolution, one
//! downstream call, response extraction. Every branch ends in exactly one
//! [`OutgoingResponse`].

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::ProviderConfig;
use crate::domain::{
    ChatResponse, IncomingRequest, OutboundChatRequest, OutgoingResponse, TaskPayload,
};
use crate::error::{ResponseFormatError, RewriteError};
use crate::ports::{LlmProviderPort, ProviderRequest};

/// Longest slice of a provider response written to the debug log.
const LOGGED_RESPONSE_LIMIT: usize = 2000;

/// Rewrites task descriptions in pirate-speak through the configured provider.
#[derive(Clone)]
pub struct RewriteService {
    provider: Arc<dyn LlmProviderPort>,
    config: Arc<ProviderConfig>,
}

impl RewriteService {
    pub fn new(provider: Arc<dyn LlmProviderPort>, config: Arc<ProviderConfig>) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Handle one inbound request.
    pub async fn handle(&self, request: IncomingRequest) -> OutgoingResponse {
        info!(
            method = %request.method,
            headers = request.headers.len(),
            body_len = request.body.len(),
            "Pirate rewrite request received"
        );

        if request.is_preflight() {
            debug!("Answering CORS preflight");
            return OutgoingResponse::preflight();
        }

        match self.handle_body(&request.body).await {
            Ok(text) => {
                info!(len = text.len(), "Pirate rewrite succeeded");
                OutgoingResponse::ok(text)
            }
            Err(err) => {
                warn!(status = err.status_code(), error = %err, "Pirate rewrite failed");
                OutgoingResponse::text(err.status_code(), err.to_string())
            }
        }
    }

    async fn handle_body(&self, body: &[u8]) -> Result<String, RewriteError> {
        debug!(raw_body = %String::from_utf8_lossy(body), "Raw request body");

        let payload =
            TaskPayload::from_body(body, self.config.default_deployment()).inspect_err(|e| {
                error!(error = ?e, "Rejected request body");
            })?;
        debug!(model = %payload.model, task_len = payload.task.len(), "Parsed task payload");

        self.rewrite(&payload).await
    }

    /// Run the downstream part of the pipeline for a validated payload.
    pub async fn rewrite(&self, payload: &TaskPayload) -> Result<String, RewriteError> {
        let Some(credentials) = self.config.credentials() else {
            error!("Provider endpoint or API key is not configured");
            return Err(RewriteError::ConfigurationMissing);
        };
        debug!(endpoint = %credentials.endpoint, "Raw endpoint");

        let outbound = OutboundChatRequest::build(&credentials, payload, self.config.api_version());
        info!(
            url = %outbound.url,
            provider = %outbound.provider,
            auth = outbound.auth.style(),
            model = %outbound.body.model,
            "Resolved chat completion endpoint"
        );

        let raw = self
            .provider
            .send(ProviderRequest::chat(outbound, self.config.timeout()))
            .await
            .inspect_err(|e| error!(error = %e, "Error calling provider"))?;
        debug!(
            raw_response = %truncate_for_log(&raw, LOGGED_RESPONSE_LIMIT),
            "Provider raw response"
        );

        let response = ChatResponse::parse(&raw).map_err(|e| {
            error!(error = %e, "Error parsing provider response JSON");
            ResponseFormatError::InvalidFormat(e.to_string())
        })?;

        response.first_choice().into_text().ok_or_else(|| {
            error!(body = %response.parsed, "Unexpected provider response structure");
            ResponseFormatError::Unrecognized.into()
        })
    }
}

fn truncate_for_log(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
