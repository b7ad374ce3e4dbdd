//! Wire types for the cloud portals and the gateway's JSON endpoints.
//!
//! Field names follow the device firmware's JSON exactly (via serde
//! renames). Every struct tolerates missing and unknown fields — firmware
//! revisions add and drop keys freely, so the schema is additive.

use serde::{Deserialize, Serialize};

// ── Cloud portal types ───────────────────────────────────────────────

/// Body returned by the Enlighten session portal on login.
///
/// `message` is `"success"` on a successful login; anything else is a
/// rejection even under HTTP 200.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionResponse {
    pub message: String,
    pub session_id: String,
    pub manager_token: String,
    pub is_consumer: bool,
}

/// Body sent to the Entrez auth portal to exchange a session for a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub session_id: String,
    pub serial_num: String,
    pub username: String,
}

// ── System info (`/home.json`) ───────────────────────────────────────

/// One physical network interface on the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)] // mirrors the wire format
pub struct NetworkInterface {
    #[serde(rename = "type")]
    pub interface_type: String,
    #[serde(rename = "interface")]
    pub name: String,
    pub mac: String,
    pub dhcp: bool,
    pub ip: String,
    pub signal_strength: i64,
    pub signal_strength_max: i64,
    pub carrier: bool,
    pub supported: bool,
    pub present: bool,
    pub configured: bool,
    pub status: String,
}

/// Gateway network status: cloud connectivity plus interface inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(rename = "web_comm")]
    pub connected: bool,
    #[serde(rename = "ever_reported_to_enlighten")]
    pub reported_to_enlighten: bool,
    #[serde(rename = "last_enlighten_report_time")]
    pub last_report_time: i64,
    pub primary_interface: String,
    pub interfaces: Vec<NetworkInterface>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessConnection {
    pub signal_strength: i64,
    pub signal_strength_max: i64,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub connected: bool,
}

/// Backup-power (Enpower) unit status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnpowerStatus {
    pub connected: bool,
    pub grid_status: String,
}

/// Device status snapshot from `GET /home.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    #[serde(rename = "software_build_epoch")]
    pub build_epoch: i64,
    #[serde(rename = "is_nonvoy")]
    pub nonvoy: bool,
    pub db_size: i64,
    #[serde(rename = "db_percent_full")]
    pub db_usage: String,
    pub timezone: String,
    pub current_date: String,
    pub current_time: String,
    pub network: Network,
    pub tariff: String,
    /// Per-device communication counters. The shape varies wildly by
    /// firmware, so it is carried undecoded.
    pub comm: Option<serde_json::Value>,
    pub alerts: Vec<String>,
    pub update_status: String,
    pub wireless_connections: Vec<WirelessConnection>,
    pub enpower: EnpowerStatus,
}

// ── Meter configuration (`/ivp/meters`) ──────────────────────────────

/// One configured metering point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meter {
    pub eid: String,
    pub state: String,
    #[serde(rename = "meteringStatus")]
    pub metering_status: String,
    #[serde(rename = "measurementType")]
    pub measurement_type: String,
    #[serde(rename = "phaseMode")]
    pub phase_mode: String,
    #[serde(rename = "phaseCount")]
    pub phase_count: u32,
    #[serde(rename = "statusFlags")]
    pub status_flags: Vec<String>,
}

// ── Meter readings (`/ivp/meters/readings`) ──────────────────────────

/// A point-in-time power measurement. Shared between a meter's aggregate
/// reading and its per-channel readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerMeasure {
    pub timestamp: i64,
    #[serde(rename = "actEnergyDlvd")]
    pub energy_delivered: f64,
    #[serde(rename = "actEnergyRcvd")]
    pub energy_received: f64,
    #[serde(rename = "apparentEnergy")]
    pub apparent_energy: f64,
    #[serde(rename = "reactiveEnergyLagg")]
    pub reactive_energy_lag: f64,
    #[serde(rename = "reactiveEnergyLead")]
    pub reactive_energy_lead: f64,
    #[serde(rename = "instantaneousDemand")]
    pub instantaneous_demand: f64,
    #[serde(rename = "activePower")]
    pub active_power: f64,
    #[serde(rename = "apparentPower")]
    pub apparent_power: f64,
    #[serde(rename = "reactivePower")]
    pub reactive_power: f64,
    #[serde(rename = "pwrFactor")]
    pub power_factor: f64,
    pub voltage: f64,
    pub current: f64,
    #[serde(rename = "freq")]
    pub frequency: f64,
}

/// One phase channel within a meter reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub eid: String,
    #[serde(flatten)]
    pub measure: PowerMeasure,
}

/// Live reading for one meter, with per-channel breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    #[serde(default)]
    pub eid: String,
    #[serde(flatten)]
    pub measure: PowerMeasure,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

// ── Inverter summary (`/api/v1/production/inverters/summary`) ────────

/// Last-known production report for one microinverter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InverterReading {
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    pub timestamp: i64,
    #[serde(rename = "devType")]
    pub device_type: String,
    #[serde(rename = "lastReportWatts")]
    pub last_report_watts: i64,
    #[serde(rename = "maxReportWatts")]
    pub max_report_watts: i64,
}
