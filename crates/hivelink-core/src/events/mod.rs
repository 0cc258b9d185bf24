use tracing::{error, info};

use crate::state::types::HealthState;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Log a health transition observed between two probe ticks.
pub fn log_health_transition(previous: HealthState, current: HealthState) {
    if previous != current {
        info!(
            event = "core.app.health_changed",
            previous = %previous,
            current = %current
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_events() {
        // Test that event functions don't panic
        log_app_startup();
        log_app_shutdown();

        let test_error = std::io::Error::other("test");
        log_app_error(&test_error);
    }

    #[test]
    fn test_health_transition_logging() {
        log_health_transition(HealthState::Disconnected, HealthState::Connected);
        log_health_transition(HealthState::Connected, HealthState::Connected);
    }
}
