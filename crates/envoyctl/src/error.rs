//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing errors with actionable help text
//! and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the gateway or the Enphase portals")]
    #[diagnostic(
        code(envoyctl::connection_failed),
        help(
            "Check that the gateway is powered and reachable on the local network.\n\
             Try: envoyctl status --gateway https://<gateway-ip>"
        )
    )]
    ConnectionFailed {
        #[source]
        source: envoy_client::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(envoyctl::auth_failed),
        help(
            "Verify the Enlighten account email, password, and gateway serial.\n\
             The serial number is printed on the gateway label."
        )
    )]
    AuthFailed {
        #[source]
        source: envoy_client::Error,
    },

    #[error("No {field} configured")]
    #[diagnostic(
        code(envoyctl::no_credentials),
        help(
            "Pass --{field}, set the matching ENVOY_* environment variable,\n\
             or add it to a profile in the config file."
        )
    )]
    MissingCredential { field: &'static str },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(envoyctl::validation))]
    Validation { field: String, reason: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Gateway request failed")]
    #[diagnostic(code(envoyctl::api_error))]
    Api {
        #[source]
        source: envoy_client::Error,
    },

    // ── Configuration / IO ───────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(envoyctl::config))]
    Config(Box<figment::Error>),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::MissingCredential { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<envoy_client::Error> for CliError {
    fn from(err: envoy_client::Error) -> Self {
        use envoy_client::Error as ApiError;

        match err {
            ApiError::Authentication { .. } | ApiError::EmptySessionId => {
                Self::AuthFailed { source: err }
            }

            // The gateway signals a stale or rejected token with a 401;
            // there is no automatic re-login at this layer.
            ApiError::Gateway { status, .. } if status.as_u16() == 401 => {
                Self::AuthFailed { source: err }
            }

            ApiError::Transport(_) => Self::ConnectionFailed { source: err },

            ApiError::MissingField { field } => Self::Validation {
                field: field.to_owned(),
                reason: "must not be empty".to_owned(),
            },

            _ => Self::Api { source: err },
        }
    }
}
