use clap::ArgMatches;
use tracing::info;

use super::helpers::build_supervisor;

pub(crate) fn handle_logs_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let count = *matches.get_one::<usize>("count").unwrap_or(&10);

    info!(event = "cli.logs_started", count = count);

    let supervisor = build_supervisor(matches)?;
    let entries = supervisor.recent_logs(count);

    if entries.is_empty() {
        println!("No log entries");
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }

    Ok(())
}
