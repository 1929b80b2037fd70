//! Models command handler.

use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Fetch the provider's model list as pretty JSON.
///
/// Listing failures yield an empty list, matching `GET /api/models`.
pub async fn render(ctx: &CliContext) -> Result<String, CliError> {
    let Some(creds) = ctx.config.credentials() else {
        return Err(pirate_core::RewriteError::ConfigurationMissing.into());
    };
    let models = ctx
        .model_lister()
        .list_models(creds.endpoint, creds.api_key)
        .await;
    Ok(format!("{:#}", json!({ "models": models })))
}

/// Execute the models command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    println!("{}", render(ctx).await?);
    Ok(())
}
