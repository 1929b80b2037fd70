//! Provider configuration.
//!
//! A [`ProviderConfig`] is assembled once by the composition root (the CLI)
//! and shared read-only with every request. Missing credentials are not an
//! error at construction time; the rewrite pipeline reports them per call.

use std::fmt;
use std::time::Duration;

/// Deployment used when a request does not name a model.
pub const DEFAULT_DEPLOYMENT: &str = "o4-mini";

/// `api-version` query value appended to constructed Azure deployment URLs.
pub const DEFAULT_API_VERSION: &str = "2025-01-01-preview";

/// Timeout applied to every outbound provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the downstream LLM provider.
///
/// Use the builder methods to customize it:
///
/// ```
/// use pirate_core::ProviderConfig;
///
/// let config = ProviderConfig::new()
///     .with_endpoint("https://my-resource.openai.azure.com/")
///     .with_api_key("secret")
///     .with_default_deployment("gpt-4o");
///
/// assert!(config.credentials().is_some());
/// ```
#[derive(Clone)]
pub struct ProviderConfig {
    endpoint: Option<String>,
    api_key: Option<String>,
    default_deployment: String,
    api_version: String,
    timeout: Duration,
}

/// Endpoint and key, both present and non-empty.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub endpoint: &'a str,
    pub api_key: &'a str,
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            default_deployment: DEFAULT_DEPLOYMENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_deployment", &self.default_deployment)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Create a configuration with defaults and no credentials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider endpoint (base resource URL or full chat URL).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an optional provider endpoint.
    #[must_use]
    pub fn with_optional_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the API key sent to the provider.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Set the deployment used when a request omits `model`.
    ///
    /// Defaults to `o4-mini`.
    #[must_use]
    pub fn with_default_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.default_deployment = deployment.into();
        self
    }

    /// Set the `api-version` used for constructed Azure URLs.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the outbound request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured endpoint, if non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().filter(|s| !s.is_empty())
    }

    /// The configured API key, if non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|s| !s.is_empty())
    }

    pub fn default_deployment(&self) -> &str {
        &self.default_deployment
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Endpoint and key together, or `None` if either is missing.
    pub fn credentials(&self) -> Option<Credentials<'_>> {
        Some(Credentials {
            endpoint: self.endpoint()?,
            api_key: self.api_key()?,
        })
    }
}
