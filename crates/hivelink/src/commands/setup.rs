use clap::ArgMatches;
use tracing::{error, info};

use super::helpers::build_supervisor;

pub(crate) fn handle_setup_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.setup_started");

    let supervisor = build_supervisor(matches)?;
    let command_count = supervisor.config().setup.commands.len();
    if command_count == 0 {
        println!("No setup commands configured (see [setup] in config.toml)");
        return Ok(());
    }

    if !supervisor.setup_blocking() {
        error!(event = "cli.setup_failed");
        for entry in supervisor.recent_logs(3) {
            eprintln!("{}", entry);
        }
        return Err("Environment setup failed".into());
    }

    println!("Environment setup complete ({} commands)", command_count);
    info!(event = "cli.setup_completed", command_count = command_count);
    Ok(())
}
