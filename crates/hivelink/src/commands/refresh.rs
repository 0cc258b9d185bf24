use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::build_supervisor;

pub(crate) fn handle_refresh_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.refresh_started");

    let supervisor = build_supervisor(matches)?;
    let result = supervisor.refresh_blocking();

    if !result.success {
        error!(event = "cli.refresh_failed", output = %result.output);
        return Err(format!("Token refresh failed: {}", result.output).into());
    }

    println!("Token refreshed");
    info!(event = "cli.refresh_completed");
    Ok(())
}
