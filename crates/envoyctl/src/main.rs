mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use envoy_client::{EnvoyClient, TransportConfig};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let gateway_config = config::resolve_gateway_config(&cli.global)?;
    let password = config::resolve_password(&cli.global)?;

    let mut transport = TransportConfig::default();
    if cli.global.timeout > 0 {
        transport = transport.with_timeout(Duration::from_secs(cli.global.timeout));
    }

    let client = EnvoyClient::new(gateway_config, &transport)?;

    tracing::debug!(gateway = %client.gateway(), "logging in");
    client.login(&password).await?;

    commands::dispatch(cli.command, &client, &cli.global).await
}
