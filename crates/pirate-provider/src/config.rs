//! Public configuration for the provider HTTP client.

use std::time::Duration;

/// Connection-level settings for [`ReqwestProvider`](crate::ReqwestProvider).
///
/// Request timeouts are not configured here; each call carries its own.
///
/// # Example
///
/// ```
/// use pirate_provider::ProviderClientConfig;
/// use std::time::Duration;
///
/// let config = ProviderClientConfig::new()
///     .with_connect_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ProviderClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// TCP/TLS connect timeout
    pub(crate) connect_timeout: Duration,
    /// Idle connections kept per host
    pub(crate) pool_max_idle_per_host: usize,
}

impl Default for ProviderClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("pirate-provider/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 10,
        }
    }
}

impl ProviderClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set how many idle connections are kept per host.
    #[must_use]
    pub const fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}
