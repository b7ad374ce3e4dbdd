//! Inverter production summary handler.

use tabled::Tabled;

use envoy_client::{EnvoyClient, InverterReading};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InverterRow {
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Last W")]
    last_watts: i64,
    #[tabled(rename = "Max W")]
    max_watts: i64,
    #[tabled(rename = "Reported")]
    timestamp: i64,
    #[tabled(rename = "Type")]
    device_type: String,
}

impl From<&InverterReading> for InverterRow {
    fn from(r: &InverterReading) -> Self {
        Self {
            serial: r.serial_number.clone(),
            last_watts: r.last_report_watts,
            max_watts: r.max_report_watts,
            timestamp: r.timestamp,
            device_type: r.device_type.clone(),
        }
    }
}

pub async fn handle(client: &EnvoyClient, global: &GlobalOpts) -> Result<(), CliError> {
    let inverters = client.read_inverters().await?;

    // Closure, not the fn item: see meters.rs
    let rendered = output::render_list(&global.output, &inverters, |r| InverterRow::from(r), |r| {
        r.serial_number.clone()
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}
