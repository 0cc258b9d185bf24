use std::thread;

use tracing::{error, info};

use crate::config::HivelinkConfig;
use crate::notify;
use crate::probe;
use crate::runner;
use crate::runner::types::{BackgroundRegistry, CommandResult};
use crate::state::SupervisorState;
use crate::state::types::LogLevel;

/// Connect: routing setup (synchronous, short-circuits on failure), then
/// the tunnel command detached, then a delayed re-probe.
///
/// Returns `true` if the tunnel start was attempted (routing did not fail).
/// A failed routing step logs, notifies, and stops — the tunnel is never
/// started and no re-probe is scheduled, matching the short-circuit
/// contract. A failed tunnel start still re-probes, since routing may have
/// changed observable state.
pub fn connect(
    config: &HivelinkConfig,
    state: &SupervisorState,
    registry: &BackgroundRegistry,
) -> bool {
    info!(event = "core.actions.connect_started");
    state.append_log("Connecting tunnel...", LogLevel::Info);

    if let Some(route_command) = &config.tunnel.route_command {
        let result = runner::run_with_timeout(route_command, config.probe.command_timeout());
        if result.success {
            state.append_log("Route configured", LogLevel::Info);
        } else {
            error!(event = "core.actions.connect_route_failed", output = %result.output);
            state.append_log(
                format!("Route setup failed: {}", result.output),
                LogLevel::Error,
            );
            notify::notify(config, "Hivelink", "Connection failed: route setup");
            return false;
        }
    }

    match runner::run_detached(&config.tunnel.start_command) {
        Ok(handle) => {
            info!(event = "core.actions.connect_tunnel_started", pid = handle.pid());
            registry.track(handle);
            state.append_log("Tunnel started in background", LogLevel::Info);
            notify::notify(config, "Hivelink", "Tunnel starting");
        }
        Err(e) => {
            error!(event = "core.actions.connect_tunnel_failed", error = %e);
            state.append_log(format!("Tunnel start failed: {}", e), LogLevel::Error);
            notify::notify(config, "Hivelink", "Connection failed: tunnel start");
        }
    }

    // Give the tunnel a moment to appear in the process table, then re-probe.
    thread::sleep(config.probe.settle_delay());
    probe::run_probe(config, state);

    info!(event = "core.actions.connect_completed");
    true
}

/// Refresh the auth token synchronously, then re-probe immediately
/// regardless of outcome.
pub fn refresh_token(config: &HivelinkConfig, state: &SupervisorState) -> CommandResult {
    info!(event = "core.actions.refresh_started");
    state.append_log("Refreshing auth token...", LogLevel::Info);

    let result = runner::run_with_timeout(
        &config.auth.refresh_command,
        config.probe.command_timeout(),
    );

    if result.success {
        state.append_log("Auth token refreshed", LogLevel::Info);
        notify::notify(config, "Hivelink", "Token refreshed");
    } else {
        error!(event = "core.actions.refresh_failed", output = %result.output);
        state.append_log(
            format!("Token refresh failed: {}", result.output),
            LogLevel::Error,
        );
        notify::notify(config, "Hivelink", "Token refresh failed");
    }

    probe::run_probe(config, state);

    info!(event = "core.actions.refresh_completed", success = result.success);
    result
}

/// Run the configured environment setup commands in order.
///
/// Fail-fast: the first failing command logs itself and its output and
/// aborts the remainder. Prior commands' effects are not rolled back.
/// Returns `true` only if every command succeeded.
pub fn setup_env(config: &HivelinkConfig, state: &SupervisorState) -> bool {
    info!(
        event = "core.actions.setup_started",
        command_count = config.setup.commands.len()
    );
    state.append_log("Configuring environment...", LogLevel::Info);

    for command in &config.setup.commands {
        let result = runner::run_with_timeout(command, config.probe.command_timeout());
        if !result.success {
            error!(
                event = "core.actions.setup_step_failed",
                command = %command,
                output = %result.output
            );
            state.append_log(
                format!("Setup command failed: {} - {}", command, result.output),
                LogLevel::Error,
            );
            notify::notify(config, "Hivelink", "Environment setup failed");
            return false;
        }
    }

    state.append_log("Environment setup complete", LogLevel::Info);
    notify::notify(config, "Hivelink", "Environment ready");
    info!(event = "core.actions.setup_completed");
    true
}

/// Run an arbitrary command synchronously and log its outcome.
pub fn run_custom(config: &HivelinkConfig, state: &SupervisorState, command: &str) -> CommandResult {
    info!(event = "core.actions.custom_started", command = command);
    state.append_log(format!("Running custom command: {}", command), LogLevel::Info);

    let result = runner::run_with_timeout(command, config.probe.command_timeout());

    if result.success {
        state.append_log(
            format!("Custom command succeeded: {}", result.output),
            LogLevel::Info,
        );
    } else {
        error!(event = "core.actions.custom_failed", output = %result.output);
        state.append_log(
            format!("Custom command failed: {}", result.output),
            LogLevel::Error,
        );
    }

    info!(event = "core.actions.custom_completed", success = result.success);
    result
}

/// Open the configured console URL via the platform opener.
pub fn open_console(config: &HivelinkConfig, state: &SupervisorState) -> CommandResult {
    open_link(config, state, config.links.console_url.as_deref(), "console")
}

/// Open the configured token page URL via the platform opener.
pub fn open_token_page(config: &HivelinkConfig, state: &SupervisorState) -> CommandResult {
    open_link(config, state, config.links.token_url.as_deref(), "token page")
}

fn open_link(
    config: &HivelinkConfig,
    state: &SupervisorState,
    url: Option<&str>,
    label: &str,
) -> CommandResult {
    let Some(url) = url else {
        let message = format!("No {} URL configured", label);
        state.append_log(message.clone(), LogLevel::Error);
        return CommandResult::failed(message);
    };

    info!(event = "core.actions.open_link_started", url = url);
    let command = format!("{} '{}'", config.links.open_command, url);
    let result = runner::run_with_timeout(&command, config.probe.command_timeout());
    state.append_log(
        format!("Opened {}: {}", label, url),
        if result.success {
            LogLevel::Info
        } else {
            LogLevel::Error
        },
    );
    result
}
