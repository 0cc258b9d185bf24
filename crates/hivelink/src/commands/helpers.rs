use std::path::Path;

use clap::ArgMatches;
use tracing::warn;

use hivelink_core::config::HivelinkConfig;
use hivelink_core::{StatusSnapshot, Supervisor};

/// Build a supervisor from `--config <path>` or the config hierarchy.
///
/// An explicit `--config` that fails to load is an error; hierarchy load
/// failures fall back to defaults with a warning, so a broken user config
/// never bricks the status commands.
pub fn build_supervisor(matches: &ArgMatches) -> Result<Supervisor, Box<dyn std::error::Error>> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => HivelinkConfig::load_file(Path::new(path))?,
        None => match HivelinkConfig::load_hierarchy() {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    event = "cli.config.load_failed",
                    error = %e,
                    "Config load failed, using defaults"
                );
                HivelinkConfig::default()
            }
        },
    };
    Ok(Supervisor::new(config))
}

/// Render the human-readable status report.
pub fn format_status_report(snapshot: &StatusSnapshot, config: &HivelinkConfig) -> String {
    let check = |ok: bool| if ok { "yes" } else { "no" };
    let kubeconfig_line = match &config.kubeconfig_path {
        Some(path) => format!(
            "{} ({})",
            check(snapshot.kubeconfig_present),
            path.display()
        ),
        None => "not configured".to_string(),
    };

    format!(
        "{} {}\n  tunnel running:     {}\n  auth valid:         {}\n  kubeconfig present: {}",
        snapshot.health.status_icon(),
        snapshot.health,
        check(snapshot.tunnel_running),
        check(snapshot.auth_valid),
        kubeconfig_line
    )
}
