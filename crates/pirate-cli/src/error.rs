//! CLI-specific error types and exit codes.

use pirate_core::RewriteError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The rewrite pipeline rejected the request or failed upstream.
    ///
    /// Displays exactly the message the HTTP function would return.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    /// The HTTP server could not start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rewrite(err) => match err {
                RewriteError::MalformedRequest(_) => 65, // EX_DATAERR
                RewriteError::ConfigurationMissing => 78, // EX_CONFIG
                RewriteError::UpstreamCallFailure(_) => 69, // EX_UNAVAILABLE
                RewriteError::UpstreamResponseMalformed(_) => 76, // EX_PROTOCOL
            },
            CliError::Server(_) => 1,
            CliError::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Server(format!("{err:#}"))
    }
}
