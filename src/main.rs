use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod gate;
mod workdir;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("jsgate=debug")
    } else {
        EnvFilter::new("jsgate=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    cli::run::execute(cli).await
}
