// Gateway client facade
//
// Owns the HTTP client, the portal/gateway URLs, and all mutable state:
// the bearer token plus the system-info and meter-list caches. Cached
// resources are fetched at most once per instance; readings always hit
// the gateway. The locks are held only across non-await sections.

use std::sync::RwLock;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{InverterReading, Meter, MeterReading, SystemInfo};
use crate::transport::TransportConfig;

/// Gateway address on a typical installation (mDNS name, self-signed TLS).
pub const DEFAULT_GATEWAY: &str = "https://envoy.local";
/// Enlighten cloud endpoint performing username/password login.
pub const DEFAULT_SESSION_PORTAL: &str = "https://enlighten.enphaseenergy.com/login/login.json";
/// Entrez cloud endpoint exchanging a session id + serial for a token.
pub const DEFAULT_AUTH_PORTAL: &str = "https://entrez.enphaseenergy.com/tokens";

const SYSTEM_INFO_PATH: &str = "/home.json";
const METERS_PATH: &str = "/ivp/meters";
const METER_READINGS_PATH: &str = "/ivp/meters/readings";
const INVERTER_SUMMARY_PATH: &str = "/api/v1/production/inverters/summary";

/// Addresses and identity for one gateway.
///
/// The three URLs default to the production endpoints; tests and unusual
/// installations override them with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub gateway: Url,
    pub session_portal: Url,
    pub auth_portal: Url,
    /// Enlighten account email, used for both portal calls.
    pub username: String,
    /// Gateway serial number, required by the token exchange.
    pub serial: String,
}

impl GatewayConfig {
    /// Config pointing at the production portals and `https://envoy.local`.
    pub fn new(username: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            gateway: Url::parse(DEFAULT_GATEWAY).expect("default gateway URL is valid"),
            session_portal: Url::parse(DEFAULT_SESSION_PORTAL)
                .expect("default session portal URL is valid"),
            auth_portal: Url::parse(DEFAULT_AUTH_PORTAL).expect("default auth portal URL is valid"),
            username: username.into(),
            serial: serial.into(),
        }
    }

    pub fn with_gateway(mut self, gateway: Url) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_session_portal(mut self, session_portal: Url) -> Self {
        self.session_portal = session_portal;
        self
    }

    pub fn with_auth_portal(mut self, auth_portal: Url) -> Self {
        self.auth_portal = auth_portal;
        self
    }
}

/// Client for one Envoy gateway.
///
/// Starts unauthenticated; [`login()`](EnvoyClient::login) stores the bearer
/// token for the lifetime of the instance. Not designed for sharing across
/// tasks — use one instance per task or serialize access externally.
pub struct EnvoyClient {
    http: reqwest::Client,
    config: GatewayConfig,
    /// Bearer token for gateway calls. `None` until a successful login;
    /// never expired or refreshed by this layer.
    token: RwLock<Option<SecretString>>,
    system_info: RwLock<Option<SystemInfo>>,
    meters: RwLock<Option<Vec<Meter>>>,
}

impl EnvoyClient {
    /// Create a client from a gateway config and transport settings.
    ///
    /// If the transport doesn't already carry a cookie jar, one is attached
    /// so the session portal's cookie is replayed on the token exchange.
    pub fn new(config: GatewayConfig, transport: &TransportConfig) -> Result<Self, Error> {
        let transport = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = transport.build_client()?;
        Ok(Self::with_client(http, config))
    }

    /// Wrap a pre-built `reqwest::Client`.
    ///
    /// Useful in tests or when the caller manages transport construction.
    pub fn with_client(http: reqwest::Client, config: GatewayConfig) -> Self {
        Self {
            http,
            config,
            token: RwLock::new(None),
            system_info: RwLock::new(None),
            meters: RwLock::new(None),
        }
    }

    /// The gateway base URL.
    pub fn gateway(&self) -> &Url {
        &self.config.gateway
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Whether a bearer token is present.
    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_ok()
    }

    pub(crate) fn set_token(&self, token: SecretString) {
        debug!("storing bearer token");
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// The stored bearer token, or a precondition error when absent/empty.
    fn bearer_token(&self) -> Result<SecretString, Error> {
        let guard = self.token.read().expect("token lock poisoned");
        match guard.as_ref() {
            Some(token) if !token.expose_secret().is_empty() => Ok(token.clone()),
            _ => Err(Error::MissingField {
                field: "auth token",
            }),
        }
    }

    // ── Gateway operations ───────────────────────────────────────────

    /// Device status snapshot from `GET /home.json`.
    ///
    /// Fetched once and cached for the lifetime of this instance; recreate
    /// the client for a fresh snapshot.
    pub async fn system_info(&self) -> Result<SystemInfo, Error> {
        if let Some(info) = self
            .system_info
            .read()
            .expect("system-info lock poisoned")
            .clone()
        {
            return Ok(info);
        }

        let info: SystemInfo = self.fetch_json(SYSTEM_INFO_PATH).await?;
        *self
            .system_info
            .write()
            .expect("system-info lock poisoned") = Some(info.clone());
        Ok(info)
    }

    /// Meter configuration from `GET /ivp/meters`.
    ///
    /// Cached the same way as [`system_info()`](Self::system_info).
    pub async fn meters(&self) -> Result<Vec<Meter>, Error> {
        if let Some(meters) = self.meters.read().expect("meter lock poisoned").clone() {
            return Ok(meters);
        }

        let meters: Vec<Meter> = self.fetch_json(METERS_PATH).await?;
        *self.meters.write().expect("meter lock poisoned") = Some(meters.clone());
        Ok(meters)
    }

    /// Live meter readings from `GET /ivp/meters/readings`. Never cached.
    pub async fn read_meters(&self) -> Result<Vec<MeterReading>, Error> {
        self.fetch_json(METER_READINGS_PATH).await
    }

    /// Per-inverter production summary from
    /// `GET /api/v1/production/inverters/summary`. Never cached.
    pub async fn read_inverters(&self) -> Result<Vec<InverterReading>, Error> {
        self.fetch_json(INVERTER_SUMMARY_PATH).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a gateway path with the bearer token attached.
    ///
    /// Fails fast (no network call) when no token is stored. Returns the
    /// raw response; status interpretation is the caller's job.
    async fn authorized_get(&self, path: &str) -> Result<reqwest::Response, Error> {
        let token = self.bearer_token()?;
        let url = self.config.gateway.join(path)?;

        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        Ok(resp)
    }

    /// GET a gateway path, require HTTP 200, and decode the body.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = self.authorized_get(path).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Gateway {
                status,
                message: body_preview(&body).to_owned(),
            });
        }

        let body = resp.text().await?;
        decode_json(&body)
    }
}

/// Truncate a body for error messages without splitting a UTF-8 character.
pub(crate) fn body_preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Decode a JSON body, attaching a body preview to decode failures.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| {
        let preview = body_preview(body);
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    })
}
