use tracing::info;

use crate::config::HivelinkConfig;
use crate::probe::operations;
use crate::state::SupervisorState;
use crate::state::types::{HealthState, StatusSnapshot};

/// Run one probe tick: evaluate the three checks, publish the result into
/// the shared state, and return the derived health.
///
/// Racing ticks (periodic vs action-triggered) are fine: the last write
/// wins, and every reader only displays the snapshot.
pub fn run_probe(config: &HivelinkConfig, state: &SupervisorState) -> HealthState {
    info!(event = "core.probe.tick_started");

    let previous = state.snapshot().health;

    let tunnel_running = operations::check_tunnel(config);
    let auth_valid = operations::check_auth(config, config.probe.command_timeout());
    let kubeconfig_present = operations::check_kubeconfig(config);

    let snapshot: StatusSnapshot =
        state.update_status(tunnel_running, auth_valid, kubeconfig_present);

    crate::events::log_health_transition(previous, snapshot.health);
    info!(
        event = "core.probe.tick_completed",
        tunnel_running = tunnel_running,
        auth_valid = auth_valid,
        kubeconfig_present = kubeconfig_present,
        health = %snapshot.health
    );

    snapshot.health
}
