//! CLI bootstrap - wires the provider client and configuration together.
//!
//! Every subcommand receives a [`CliContext`]; nothing else constructs the
//! reqwest provider.

use std::sync::Arc;

use pirate_core::{LlmProviderPort, ModelLister, ProviderConfig, RewriteService};
use pirate_provider::{ProviderClientConfig, ReqwestProvider};
use tracing::debug;

use crate::error::CliError;
use crate::parser::ProviderArgs;

/// Shared dependencies for CLI handlers.
pub struct CliContext {
    pub config: Arc<ProviderConfig>,
    pub provider: Arc<dyn LlmProviderPort>,
}

impl CliContext {
    pub fn new(config: ProviderConfig, provider: Arc<dyn LlmProviderPort>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    pub fn rewrite_service(&self) -> RewriteService {
        RewriteService::new(Arc::clone(&self.provider), Arc::clone(&self.config))
    }

    pub fn model_lister(&self) -> ModelLister {
        ModelLister::new(Arc::clone(&self.provider), self.config.timeout())
    }
}

/// Build the CLI context from parsed provider arguments.
pub fn bootstrap(args: &ProviderArgs) -> Result<CliContext, CliError> {
    let config = args.to_config();
    debug!(
        target: "pirate.config",
        endpoint = config.endpoint().unwrap_or("<unset>"),
        api_key_set = config.api_key().is_some(),
        default_deployment = %config.default_deployment(),
        "CLI bootstrap resolved provider configuration"
    );

    let provider = ReqwestProvider::new(&ProviderClientConfig::default())
        .map_err(|e| CliError::Config(format!("failed to build HTTP client: {e}")))?;
    Ok(CliContext::new(config, Arc::new(provider)))
}
