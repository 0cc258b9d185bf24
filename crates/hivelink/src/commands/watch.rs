use std::time::Duration;

use clap::ArgMatches;
use tracing::info;

use super::helpers::{build_supervisor, format_status_report};

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let supervisor = build_supervisor(matches)?;
    let interval = matches
        .get_one::<u64>("interval-secs")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or_else(|| supervisor.config().probe.interval());

    info!(event = "cli.watch_started", interval_secs = interval.as_secs());

    let mut previous = None;
    loop {
        let health = supervisor.tick();
        if previous != Some(health) {
            let snapshot = supervisor.snapshot();
            println!("{}", format_status_report(&snapshot, supervisor.config()));
            previous = Some(health);
        }
        std::thread::sleep(interval);
    }
}
