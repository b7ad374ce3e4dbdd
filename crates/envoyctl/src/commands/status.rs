//! Gateway status handler.

use envoy_client::{EnvoyClient, SystemInfo};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &EnvoyClient, global: &GlobalOpts) -> Result<(), CliError> {
    let info = client.system_info().await?;

    let rendered = output::render_single(&global.output, &info, detail, |i| {
        format!("{} {}", i.current_date, i.current_time)
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}

fn detail(info: &SystemInfo) -> String {
    let mut lines = vec![
        format!("Build epoch:   {}", info.build_epoch),
        format!("Timezone:      {}", info.timezone),
        format!("Current time:  {} {}", info.current_date, info.current_time),
        format!("DB usage:      {}% of {} bytes", info.db_usage, info.db_size),
        format!("Tariff:        {}", info.tariff),
        format!(
            "Cloud link:    {}",
            if info.network.connected { "up" } else { "down" }
        ),
        format!("Primary iface: {}", info.network.primary_interface),
        format!("Update status: {}", info.update_status),
    ];

    if !info.alerts.is_empty() {
        lines.push(format!("Alerts:        {}", info.alerts.join(", ")));
    }
    if info.enpower.connected {
        lines.push(format!("Enpower grid:  {}", info.enpower.grid_status));
    }

    if !info.network.interfaces.is_empty() {
        lines.push("Interfaces:".to_owned());
        for iface in &info.network.interfaces {
            lines.push(format!(
                "  {:8} {:10} {:15} {}",
                iface.name,
                iface.interface_type,
                iface.ip,
                if iface.carrier { "carrier" } else { "no carrier" }
            ));
        }
    }

    lines.join("\n")
}
