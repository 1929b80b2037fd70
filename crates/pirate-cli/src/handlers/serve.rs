//! Serve command handler.

use pirate_axum::{AxumContext, ServerConfig, start_server};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Run the HTTP function server until Ctrl-C.
pub async fn execute(ctx: &CliContext, host: String, port: u16) -> Result<(), CliError> {
    let server = ServerConfig { host, port };
    let axum_ctx = AxumContext::new((*ctx.config).clone(), ctx.provider.clone());
    start_server(&server, axum_ctx).await?;
    Ok(())
}
