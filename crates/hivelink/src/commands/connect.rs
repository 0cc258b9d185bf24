use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::{build_supervisor, format_status_report};

pub(crate) fn handle_connect_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.connect_started");

    let supervisor = build_supervisor(matches)?;
    if !supervisor.connect_blocking() {
        error!(event = "cli.connect_failed");
        for entry in supervisor.recent_logs(3) {
            eprintln!("{}", entry);
        }
        return Err("Connect aborted: routing setup failed".into());
    }

    let snapshot = supervisor.snapshot();
    println!("{}", format_status_report(&snapshot, supervisor.config()));

    info!(event = "cli.connect_completed", health = %snapshot.health);
    Ok(())
}
