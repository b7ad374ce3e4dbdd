//! Command dispatch: bridges CLI args -> library calls -> output formatting.

pub mod inverters;
pub mod meters;
pub mod readings;
pub mod status;

use envoy_client::EnvoyClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a gateway-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &EnvoyClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle(client, global).await,
        Command::Meters => meters::handle(client, global).await,
        Command::Readings => readings::handle(client, global).await,
        Command::Inverters => inverters::handle(client, global).await,
    }
}
