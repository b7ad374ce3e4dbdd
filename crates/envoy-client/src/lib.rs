//! Async client for the Enphase Envoy local gateway.
//!
//! The Envoy exposes its metering API on the local network behind a
//! self-signed TLS certificate, but authenticates against Enphase's cloud:
//! a two-step handshake logs into the Enlighten session portal with the
//! account email/password, then exchanges the resulting session id plus the
//! gateway serial number at the Entrez auth portal for a bearer token. The
//! token lives in memory for the lifetime of the [`EnvoyClient`] and is
//! attached to every gateway request.
//!
//! - **[`EnvoyClient`]** — the facade. [`login()`](EnvoyClient::login)
//!   performs the handshake; [`system_info()`](EnvoyClient::system_info) and
//!   [`meters()`](EnvoyClient::meters) fetch once and cache for the instance
//!   lifetime; [`read_meters()`](EnvoyClient::read_meters) and
//!   [`read_inverters()`](EnvoyClient::read_inverters) always fetch fresh.
//! - **[`GatewayConfig`]** — gateway and portal URLs (with production
//!   defaults), account username, and gateway serial.
//! - **[`TransportConfig`]** — reqwest client construction: cookie jar,
//!   optional timeout, and self-signed certificate acceptance.
//!
//! ```no_run
//! use envoy_client::{EnvoyClient, GatewayConfig, TransportConfig};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), envoy_client::Error> {
//! let config = GatewayConfig::new("owner@example.com", "122107000000");
//! let client = EnvoyClient::new(config, &TransportConfig::default())?;
//!
//! client.login(&SecretString::from("hunter2".to_owned())).await?;
//!
//! for reading in client.read_meters().await? {
//!     println!("{}: {} W", reading.eid, reading.measure.active_power);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;
mod portal;
mod transport;

pub use client::{
    DEFAULT_AUTH_PORTAL, DEFAULT_GATEWAY, DEFAULT_SESSION_PORTAL, EnvoyClient, GatewayConfig,
};
pub use error::Error;
pub use models::{
    Channel, EnpowerStatus, InverterReading, Meter, MeterReading, Network, NetworkInterface,
    PowerMeasure, SessionResponse, SystemInfo, TokenRequest, WirelessConnection,
};
pub use transport::TransportConfig;
