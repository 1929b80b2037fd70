//! Main CLI parser and top-level argument handling.
//!
//! Provider settings are global options backed by environment variables, so
//! a `.env` file is enough to configure every subcommand.

use std::time::Duration;

use clap::{Args, Parser};
use pirate_core::{DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, ProviderConfig};

use crate::commands::Commands;

/// Command-line interface definition for the pirate rewrite adapter.
#[derive(Parser)]
#[command(name = "pirate")]
#[command(about = "Rewrite tasks in pirate-speak with a hosted chat-completion model")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub provider: ProviderArgs,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Downstream provider settings.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Provider base URL, or a full chat-completion URL
    #[arg(long, env = "AZURE_FOUNDRY_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// API key sent as `api-key` (Azure) or `Authorization: Bearer` (others)
    #[arg(
        long = "api-key",
        env = "AZURE_FOUNDRY_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// Deployment used when a request does not name a model
    #[arg(
        long,
        env = "AZURE_FOUNDRY_DEFAULT_DEPLOYMENT",
        default_value = DEFAULT_DEPLOYMENT,
        global = true
    )]
    pub default_deployment: String,

    /// `api-version` for constructed Azure deployment URLs
    #[arg(
        long,
        env = "AZURE_FOUNDRY_API_VERSION",
        default_value = DEFAULT_API_VERSION,
        global = true
    )]
    pub api_version: String,

    /// Timeout for each provider call, in seconds
    #[arg(long, env = "PIRATE_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

impl ProviderArgs {
    /// Build the provider configuration these arguments describe.
    pub fn to_config(&self) -> ProviderConfig {
        ProviderConfig::new()
            .with_optional_endpoint(self.endpoint.clone())
            .with_optional_api_key(self.api_key.clone())
            .with_default_deployment(self.default_deployment.clone())
            .with_api_version(self.api_version.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
