use clap::ArgMatches;
use tracing::info;

use super::helpers::{build_supervisor, format_status_report};

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.status_started");

    let supervisor = build_supervisor(matches)?;
    supervisor.tick();
    let snapshot = supervisor.snapshot();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", format_status_report(&snapshot, supervisor.config()));
    }

    info!(event = "cli.status_completed", health = %snapshot.health);
    Ok(())
}
