//! Clap derive structures for the `envoyctl` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// envoyctl -- query an Enphase Envoy gateway from the command line
#[derive(Debug, Parser)]
#[command(
    name = "envoyctl",
    version,
    about = "Query an Enphase Envoy gateway from the command line",
    long_about = "Polls a local Envoy gateway for system status, metering\n\
        configuration, and live power/production readings.\n\n\
        Authentication goes through the Enphase cloud: an Enlighten session\n\
        login followed by an Entrez token exchange; the resulting bearer\n\
        token is then used against the gateway itself.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "ENVOY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Gateway base URL (overrides profile)
    #[arg(long, short = 'g', env = "ENVOY_GATEWAY", global = true)]
    pub gateway: Option<String>,

    /// Enlighten session portal URL
    #[arg(long, env = "ENVOY_SESSION_PORTAL", global = true)]
    pub session_portal: Option<String>,

    /// Entrez auth portal URL
    #[arg(long, env = "ENVOY_AUTH_PORTAL", global = true)]
    pub auth_portal: Option<String>,

    /// Enlighten account email
    #[arg(long, short = 'u', env = "ENVOY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Gateway serial number
    #[arg(long, short = 's', env = "ENVOY_SERIAL", global = true)]
    pub serial: Option<String>,

    /// Account password (prompted interactively when unset)
    #[arg(long, env = "ENVOY_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ENVOY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (0 disables the deadline)
    #[arg(long, env = "ENVOY_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the gateway status snapshot
    #[command(alias = "info")]
    Status,

    /// List configured metering points
    Meters,

    /// Read live meter measurements
    #[command(alias = "read")]
    Readings,

    /// Show the per-inverter production summary
    #[command(alias = "inv")]
    Inverters,
}
