//! Model listing.
//!
//! Failures never reach the caller; they are logged and reported as an
//! empty list.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{AuthHeader, models_url};
use crate::ports::{LlmProviderPort, ProviderRequest};

/// One entry of the provider's `models` array, passed through unchanged.
pub type ModelDescriptor = Value;

/// Lists the models a provider exposes.
#[derive(Clone)]
pub struct ModelLister {
    provider: Arc<dyn LlmProviderPort>,
    timeout: Duration,
}

impl ModelLister {
    pub fn new(provider: Arc<dyn LlmProviderPort>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// `GET {endpoint}/models`, returning the `models` array or nothing.
    pub async fn list_models(&self, endpoint: &str, api_key: &str) -> Vec<ModelDescriptor> {
        let url = models_url(endpoint);
        let auth = AuthHeader::for_url(endpoint, api_key);
        debug!(url = %url, auth = auth.style(), "Listing provider models");

        let raw = match self
            .provider
            .send(ProviderRequest::get(url, auth, self.timeout))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Model listing failed");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(mut map)) => match map.remove("models") {
                Some(Value::Array(models)) => models,
                Some(other) => {
                    warn!(kind = json_kind(&other), "`models` is not an array");
                    Vec::new()
                }
                None => Vec::new(),
            },
            Ok(other) => {
                warn!(kind = json_kind(&other), "Model listing is not a JSON object");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Model listing is not valid JSON");
                Vec::new()
            }
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
