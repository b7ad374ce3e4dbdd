//! Live meter reading handler.

use tabled::Tabled;

use envoy_client::{EnvoyClient, MeterReading};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "EID")]
    eid: String,
    #[tabled(rename = "Active W")]
    active_power: String,
    #[tabled(rename = "Apparent VA")]
    apparent_power: String,
    #[tabled(rename = "PF")]
    power_factor: String,
    #[tabled(rename = "Voltage")]
    voltage: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Freq")]
    frequency: String,
    #[tabled(rename = "Channels")]
    channels: usize,
}

impl From<&MeterReading> for ReadingRow {
    fn from(r: &MeterReading) -> Self {
        let m = &r.measure;
        Self {
            eid: r.eid.clone(),
            active_power: format!("{:.1}", m.active_power),
            apparent_power: format!("{:.1}", m.apparent_power),
            power_factor: format!("{:.3}", m.power_factor),
            voltage: format!("{:.1}", m.voltage),
            current: format!("{:.2}", m.current),
            frequency: format!("{:.2}", m.frequency),
            channels: r.channels.len(),
        }
    }
}

pub async fn handle(client: &EnvoyClient, global: &GlobalOpts) -> Result<(), CliError> {
    let readings = client.read_meters().await?;

    // Closure, not the fn item: see meters.rs
    let rendered = output::render_list(&global.output, &readings, |r| ReadingRow::from(r), |r| {
        r.eid.clone()
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}
