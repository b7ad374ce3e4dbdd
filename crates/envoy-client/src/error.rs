use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`EnvoyClient`](crate::EnvoyClient) operations.
///
/// Every failure is reported upward as a value; nothing is retried
/// internally, and the client's token and caches are left untouched on
/// failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required parameter was empty. Detected before any network call
    /// is made.
    #[error("{field} is empty")]
    MissingField { field: &'static str },

    /// Network-level failure, surfaced unchanged from reqwest.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    /// Login rejected: non-2xx from a portal, or a session response whose
    /// message was not the success marker.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The session portal reported success but returned no session id.
    #[error("session portal returned success without a session id")]
    EmptySessionId,

    /// The gateway answered a device call with a non-200 status.
    #[error("gateway returned HTTP {status}")]
    Gateway { status: StatusCode, message: String },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response: {message}")]
    Deserialization { message: String, body: String },
}
