use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info};

use hivelink_core::ExecutionMode;

use super::helpers::build_supervisor;

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches
        .get_one::<String>("command")
        .ok_or("Command argument is required")?;
    let mode = if matches.get_flag("background") {
        ExecutionMode::Background
    } else {
        ExecutionMode::Foreground
    };
    let timeout = matches
        .get_one::<u64>("timeout-secs")
        .map(|secs| Duration::from_secs(*secs));

    info!(event = "cli.run_started", command = %command, mode = ?mode);

    let supervisor = build_supervisor(matches)?;
    let result = supervisor.execute(command, mode, timeout);

    if !result.output.is_empty() {
        println!("{}", result.output);
    }

    if !result.success {
        error!(event = "cli.run_failed", output = %result.output);
        return Err(format!("Command failed: {}", command).into());
    }

    info!(event = "cli.run_completed");
    Ok(())
}
