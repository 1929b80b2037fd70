//! Provider classification, URL construction, and auth header selection.
//!
//! Detection is a plain case-sensitive substring check on the URL. The same
//! classification drives both URL construction and the auth scheme, so it
//! lives in one function.

use std::fmt;

const AZURE_OPENAI_DOMAIN: &str = ".openai.azure.com";
const AZURE_COGNITIVE_DOMAIN: &str = ".cognitiveservices.azure.com";
const DEPLOYMENTS_SEGMENT: &str = "/openai/deployments/";

/// Which family of provider an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Azure OpenAI or Azure Cognitive Services resource.
    AzureStyle,
    /// Any other OpenAI-compatible endpoint.
    Generic,
}

impl ProviderKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AzureStyle => "azure",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an endpoint URL by domain substring.
pub fn classify_provider(url: &str) -> ProviderKind {
    if url.contains(AZURE_OPENAI_DOMAIN) || url.contains(AZURE_COGNITIVE_DOMAIN) {
        ProviderKind::AzureStyle
    } else {
        ProviderKind::Generic
    }
}

/// Resolve the chat-completion URL for `model`.
///
/// Azure base resource URLs get the deployment path and `api-version`
/// appended. Azure URLs that already name a deployment, and all generic
/// endpoints, are used as given.
pub fn resolve_chat_url(endpoint: &str, model: &str, api_version: &str) -> String {
    match classify_provider(endpoint) {
        ProviderKind::AzureStyle if endpoint.contains(DEPLOYMENTS_SEGMENT) => {
            endpoint.trim_end().to_string()
        }
        ProviderKind::AzureStyle => format!(
            "{}/openai/deployments/{model}/chat/completions?api-version={api_version}",
            endpoint.trim_end_matches('/')
        ),
        ProviderKind::Generic => endpoint.to_string(),
    }
}

/// URL of the provider's model-listing endpoint.
pub fn models_url(endpoint: &str) -> String {
    format!("{}/models", endpoint.trim_end_matches('/'))
}

/// Authentication header for an outbound provider call.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthHeader {
    /// `api-key: <key>`, used by Azure resources.
    ApiKey(String),
    /// `Authorization: Bearer <key>`, used by everything else.
    Bearer(String),
}

impl AuthHeader {
    /// Pick the header style for `url`.
    pub fn for_url(url: &str, api_key: &str) -> Self {
        match classify_provider(url) {
            ProviderKind::AzureStyle => Self::ApiKey(api_key.to_string()),
            ProviderKind::Generic => Self::Bearer(api_key.to_string()),
        }
    }

    /// Header name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api-key",
            Self::Bearer(_) => "Authorization",
        }
    }

    /// Header value, including the `Bearer ` prefix where applicable.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::ApiKey(key) => key.clone(),
            Self::Bearer(key) => format!("Bearer {key}"),
        }
    }

    /// Short label safe for logs.
    #[must_use]
    pub const fn style(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api-key",
            Self::Bearer(_) => "bearer",
        }
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthHeader({}: <redacted>)", self.name())
    }
}

/// Free-function form of [`AuthHeader::for_url`].
pub fn auth_header_for(url: &str, api_key: &str) -> AuthHeader {
    AuthHeader::for_url(url, api_key)
}
