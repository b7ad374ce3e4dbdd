// Transport configuration
//
// Builds the `reqwest::Client` shared by the cloud portals and the local
// gateway. The gateway presents a self-signed certificate, so verification
// is disabled by default; the session portal sets a cookie that the token
// exchange relies on, so a cookie store is always enabled.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

use crate::error::Error;

/// HTTP transport settings for an [`EnvoyClient`](crate::EnvoyClient).
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request deadline. `None` means the client imposes no timeout of its
    /// own and calls may block until the peer responds.
    pub timeout: Option<Duration>,
    /// Accept the gateway's self-signed certificate. Defaults to `true`;
    /// turn this off only when the gateway carries a trusted certificate.
    pub danger_accept_invalid_certs: bool,
    /// Explicit cookie jar. When `None`, an internal cookie store is
    /// enabled so the session cookie still rides along automatically.
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            danger_accept_invalid_certs: true,
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a fresh shared cookie jar.
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }

    /// Build a `reqwest::Client` from this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match &self.cookie_jar {
            Some(jar) => builder.cookie_provider(Arc::clone(jar)),
            None => builder.cookie_store(true),
        };

        Ok(builder.build()?)
    }
}
