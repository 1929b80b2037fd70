//! Production provider backend using reqwest.
//!
//! No retries: a failed call is reported once and the caller decides what to
//! do with it.

use async_trait::async_trait;
use pirate_core::{LlmProviderPort, ProviderMethod, ProviderRequest, ProviderResult};
use tracing::debug;

use crate::config::ProviderClientConfig;
use crate::error::{ClientError, ClientResult};

/// Provider client backed by a pooled [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestProvider {
    client: reqwest::Client,
}

impl ReqwestProvider {
    /// Build a client from connection settings.
    pub fn new(config: &ProviderClientConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: &ProviderRequest) -> ClientResult<String> {
        let mut builder = match request.method {
            ProviderMethod::Get => self.client.get(&request.url),
            ProviderMethod::Post => self.client.post(&request.url),
        }
        .timeout(request.timeout);

        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            status = status.as_u16(),
            "Provider responded"
        );

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl LlmProviderPort for ReqwestProvider {
    async fn send(&self, request: ProviderRequest) -> ProviderResult<String> {
        self.execute(&request)
            .await
            .map_err(|e| e.into_port_error(&request.url))
    }
}
