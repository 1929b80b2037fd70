//! Axum server bootstrap - the composition root for the web adapter.
//!
//! This module is the ONLY place where the provider client, configuration,
//! and services are wired together for HTTP serving.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use pirate_core::{LlmProviderPort, ModelLister, ProviderConfig, RewriteService};
use pirate_provider::{ProviderClientConfig, ReqwestProvider};
use tokio::net::TcpListener;
use tracing::info;

/// Listen address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7071,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the configured services; built once and shared by every request.
pub struct AxumContext {
    /// Provider configuration, also used directly by model listing.
    pub config: Arc<ProviderConfig>,
    /// The pirate rewrite pipeline.
    pub rewrite: RewriteService,
    /// Provider model listing.
    pub models: ModelLister,
}

impl AxumContext {
    /// Wire services around an arbitrary provider implementation.
    pub fn new(config: ProviderConfig, provider: Arc<dyn LlmProviderPort>) -> Self {
        let config = Arc::new(config);
        Self {
            rewrite: RewriteService::new(Arc::clone(&provider), Arc::clone(&config)),
            models: ModelLister::new(provider, config.timeout()),
            config,
        }
    }
}

/// Bootstrap the context with the production reqwest provider.
pub fn bootstrap(config: ProviderConfig) -> Result<AxumContext> {
    info!(
        target: "pirate.config",
        endpoint = config.endpoint().unwrap_or("<unset>"),
        api_key_set = config.api_key().is_some(),
        default_deployment = %config.default_deployment(),
        api_version = %config.api_version(),
        timeout_secs = config.timeout().as_secs(),
        "Axum bootstrap resolved provider configuration"
    );

    let provider = ReqwestProvider::new(&ProviderClientConfig::default())?;
    Ok(AxumContext::new(config, Arc::new(provider)))
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, ctx: AxumContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = crate::routes::create_router(ctx);

    info!("pirate rewrite function listening on http://{addr}");
    info!("POST tasks to http://{addr}{}", crate::routes::REWRITE_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("pirate rewrite function shut down");
    Ok(())
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn start_server(config: &ServerConfig, ctx: AxumContext) -> Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    serve(listener, ctx, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    })
    .await
}
