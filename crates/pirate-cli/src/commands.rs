//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the rewrite function over HTTP
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 7071)]
        port: u16,
    },

    /// Rewrite a single task and print the result
    Rewrite {
        /// The task description to rewrite
        task: String,

        /// Model or deployment name (defaults to the configured deployment)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List models available from the provider
    Models,
}
