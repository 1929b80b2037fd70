//! CLI entry point - the composition root.
//!
//! `.env` is loaded before argument parsing so provider settings can come
//! from either place.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pirate_cli::{Cli, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    // stderr keeps `rewrite` and `models` output pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&cli.provider);
    let result = match ctx {
        Ok(ctx) => match command {
            Commands::Serve { host, port } => handlers::serve::execute(&ctx, host, port).await,
            Commands::Rewrite { task, model } => {
                handlers::rewrite::execute(&ctx, &task, model.as_deref()).await
            }
            Commands::Models => handlers::models::execute(&ctx).await,
        },
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
