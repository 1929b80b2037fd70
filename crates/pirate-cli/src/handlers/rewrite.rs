//! Rewrite command handler.
//!
//! Runs the same pipeline as the HTTP function, minus the transport.

use pirate_core::TaskPayload;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Rewrite `task` and return the model's text.
pub async fn rewrite(
    ctx: &CliContext,
    task: &str,
    model: Option<&str>,
) -> Result<String, CliError> {
    // Round-trip through the request body parser so validation matches HTTP.
    let body = json!({ "task": task, "model": model }).to_string();
    let payload = TaskPayload::from_body(body.as_bytes(), ctx.config.default_deployment())
        .map_err(pirate_core::RewriteError::from)?;
    Ok(ctx.rewrite_service().rewrite(&payload).await?)
}

/// Execute the rewrite command, printing the result to stdout.
pub async fn execute(ctx: &CliContext, task: &str, model: Option<&str>) -> Result<(), CliError> {
    let text = rewrite(ctx, task, model).await?;
    println!("{text}");
    Ok(())
}
