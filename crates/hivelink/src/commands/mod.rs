use clap::ArgMatches;
use tracing::error;

use hivelink_core::events;

pub mod helpers;

mod completions;
mod connect;
mod logs;
mod open;
mod refresh;
mod run;
mod setup;
mod status;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("connect", sub_matches)) => connect::handle_connect_command(sub_matches),
        Some(("refresh", sub_matches)) => refresh::handle_refresh_command(sub_matches),
        Some(("setup", sub_matches)) => setup::handle_setup_command(sub_matches),
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("logs", sub_matches)) => logs::handle_logs_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("open", sub_matches)) => open::handle_open_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
