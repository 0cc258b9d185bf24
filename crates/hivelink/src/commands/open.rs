use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::build_supervisor;

pub(crate) fn handle_open_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let target = matches
        .get_one::<String>("target")
        .ok_or("Target argument is required")?;

    info!(event = "cli.open_started", target = %target);

    let supervisor = build_supervisor(matches)?;
    let result = match target.as_str() {
        "console" => supervisor.open_console(),
        "token" => supervisor.open_token_page(),
        other => return Err(format!("Unknown open target: {}", other).into()),
    };

    if !result.success {
        error!(event = "cli.open_failed", output = %result.output);
        return Err(result.output.into());
    }

    info!(event = "cli.open_completed", target = %target);
    Ok(())
}
