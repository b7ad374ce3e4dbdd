//! CLI configuration: TOML profiles with flag/env overrides.
//!
//! Profiles live in `~/.config/envoyctl/config.toml`; CLI flags (which
//! carry `ENVOY_*` env fallbacks via clap) take priority over profile
//! values, and anything still unset falls back to the library defaults.

use std::collections::BTreeMap;
use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Format, Toml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use envoy_client::GatewayConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Config file shape ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// One named gateway profile. Every field is optional; unset values fall
/// back to flags and then to the library defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub gateway: Option<String>,
    pub session_portal: Option<String>,
    pub auth_portal: Option<String>,
    pub username: Option<String>,
    pub serial: Option<String>,
}

/// Path to the config file: `~/.config/envoyctl/config.toml`.
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "envoyctl").map_or_else(
        || PathBuf::from("envoyctl.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load the config file, or defaults when it doesn't exist or won't parse.
pub fn load_config_or_default() -> Config {
    Figment::new()
        .merge(Toml::file(config_path()))
        .extract()
        .unwrap_or_default()
}

// ── Resolution ───────────────────────────────────────────────────────

/// Resolve the active profile name from flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a [`GatewayConfig`] from the active profile with flag overrides.
///
/// Username and serial are mandatory; the URLs default to the production
/// portals and `https://envoy.local`.
pub fn resolve_gateway_config(global: &GlobalOpts) -> Result<GatewayConfig, CliError> {
    let config = load_config_or_default();
    let profile_name = active_profile_name(global, &config);
    let profile = config
        .profiles
        .get(&profile_name)
        .cloned()
        .unwrap_or_default();

    let username = global
        .username
        .clone()
        .or(profile.username)
        .ok_or(CliError::MissingCredential { field: "username" })?;
    let serial = global
        .serial
        .clone()
        .or(profile.serial)
        .ok_or(CliError::MissingCredential { field: "serial" })?;

    let mut gateway_config = GatewayConfig::new(username, serial);

    if let Some(raw) = global.gateway.as_deref().or(profile.gateway.as_deref()) {
        gateway_config = gateway_config.with_gateway(parse_url("gateway", raw)?);
    }
    if let Some(raw) = global
        .session_portal
        .as_deref()
        .or(profile.session_portal.as_deref())
    {
        gateway_config = gateway_config.with_session_portal(parse_url("session-portal", raw)?);
    }
    if let Some(raw) = global
        .auth_portal
        .as_deref()
        .or(profile.auth_portal.as_deref())
    {
        gateway_config = gateway_config.with_auth_portal(parse_url("auth-portal", raw)?);
    }

    Ok(gateway_config)
}

fn parse_url(field: &str, raw: &str) -> Result<Url, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: field.to_owned(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Resolve the account password: flag/env first, interactive prompt otherwise.
pub fn resolve_password(global: &GlobalOpts) -> Result<SecretString, CliError> {
    if let Some(ref password) = global.password {
        return Ok(SecretString::from(password.clone()));
    }

    let prompted = rpassword::prompt_password("Enlighten password: ")?;
    Ok(SecretString::from(prompted))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn global_with(profile: Option<&str>, username: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            profile: profile.map(str::to_owned),
            gateway: None,
            session_portal: None,
            auth_portal: None,
            username: username.map(str::to_owned),
            serial: None,
            password: None,
            output: crate::cli::OutputFormat::Table,
            verbose: 0,
            quiet: false,
            timeout: 30,
        }
    }

    #[test]
    fn profile_name_prefers_flag_over_config_default() {
        let config = Config {
            default_profile: Some("home".into()),
            profiles: BTreeMap::new(),
        };

        assert_eq!(
            active_profile_name(&global_with(Some("cabin"), None), &config),
            "cabin"
        );
        assert_eq!(active_profile_name(&global_with(None, None), &config), "home");
        assert_eq!(
            active_profile_name(&global_with(None, None), &Config::default()),
            "default"
        );
    }

    #[test]
    fn missing_serial_is_reported() {
        let global = global_with(None, Some("owner@example.com"));
        let result = resolve_gateway_config(&global);

        assert!(matches!(
            result,
            Err(CliError::MissingCredential { field: "serial" })
        ));
    }

    #[test]
    fn config_file_round_trips_through_toml() {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "home".to_owned(),
            Profile {
                gateway: Some("https://192.168.1.40".into()),
                username: Some("owner@example.com".into()),
                serial: Some("122107001234".into()),
                ..Profile::default()
            },
        );
        let config = Config {
            default_profile: Some("home".into()),
            profiles,
        };

        let rendered = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed.default_profile.as_deref(), Some("home"));
        assert_eq!(
            parsed.profiles["home"].gateway.as_deref(),
            Some("https://192.168.1.40")
        );
    }
}
