//! Meter configuration handler.

use tabled::Tabled;

use envoy_client::{EnvoyClient, Meter};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MeterRow {
    #[tabled(rename = "EID")]
    eid: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Type")]
    measurement_type: String,
    #[tabled(rename = "Phase Mode")]
    phase_mode: String,
    #[tabled(rename = "Phases")]
    phases: u32,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Meter> for MeterRow {
    fn from(m: &Meter) -> Self {
        Self {
            eid: m.eid.clone(),
            state: m.state.clone(),
            measurement_type: m.measurement_type.clone(),
            phase_mode: m.phase_mode.clone(),
            phases: m.phase_count,
            status: if m.status_flags.is_empty() {
                m.metering_status.clone()
            } else {
                format!("{} [{}]", m.metering_status, m.status_flags.join(","))
            },
        }
    }
}

pub async fn handle(client: &EnvoyClient, global: &GlobalOpts) -> Result<(), CliError> {
    let meters = client.meters().await?;

    // Closure, not the fn item: `From<&Meter>` is instantiated at one
    // lifetime and doesn't satisfy the higher-ranked `Fn` bound.
    let rendered = output::render_list(&global.output, &meters, |m| MeterRow::from(m), |m| {
        m.eid.clone()
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn meter_rows_render_as_a_table() {
        let meters = vec![Meter {
            eid: "704643328".into(),
            state: "enabled".into(),
            metering_status: "normal".into(),
            measurement_type: "production".into(),
            phase_mode: "three".into(),
            phase_count: 3,
            status_flags: vec!["production-imbalance".into()],
        }];

        let rendered = output::render_list(&OutputFormat::Table, &meters, |m| MeterRow::from(m), |m| {
            m.eid.clone()
        });

        assert!(rendered.contains("704643328"));
        assert!(rendered.contains("normal [production-imbalance]"));
    }
}
