use std::time::Duration;

use tracing::warn;

use crate::config::HivelinkConfig;
use crate::process;
use crate::runner;
use crate::runner::types::ExecutionMode;

/// Tunnel liveness: a process matching the configured name substring exists.
///
/// A failed process-table query counts as not running; the tick must never
/// abort on a degraded check.
pub fn check_tunnel(config: &HivelinkConfig) -> bool {
    match process::is_process_running_by_name(&config.tunnel.process_name) {
        Ok(running) => running,
        Err(e) => {
            warn!(
                event = "core.probe.tunnel_check_failed",
                pattern = %config.tunnel.process_name,
                error = %e
            );
            false
        }
    }
}

/// Auth validity: the configured whoami command exits successfully.
///
/// Output is ignored; only the exit status matters.
pub fn check_auth(config: &HivelinkConfig, timeout: Duration) -> bool {
    runner::execute(
        &config.auth.whoami_command,
        ExecutionMode::Foreground,
        timeout,
    )
    .success
}

/// Kubeconfig presence. Informational only: recorded in the snapshot but
/// never folded into the health derivation.
pub fn check_kubeconfig(config: &HivelinkConfig) -> bool {
    config
        .kubeconfig_path
        .as_deref()
        .is_some_and(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> HivelinkConfig {
        let mut config = HivelinkConfig::default();
        config.tunnel.process_name = "nonexistent-tunnel-xyz".to_string();
        config
    }

    #[test]
    fn test_check_tunnel_not_running() {
        let config = test_config();
        assert!(!check_tunnel(&config));
    }

    #[test]
    fn test_check_tunnel_invalid_pattern_degrades_to_false() {
        let mut config = test_config();
        config.tunnel.process_name = "sh".to_string();
        // Pattern too short for the process query; check degrades, no panic.
        assert!(!check_tunnel(&config));
    }

    #[test]
    fn test_check_auth_success_and_failure() {
        let mut config = test_config();

        config.auth.whoami_command = "true".to_string();
        assert!(check_auth(&config, Duration::from_secs(5)));

        config.auth.whoami_command = "false".to_string();
        assert!(!check_auth(&config, Duration::from_secs(5)));
    }

    #[test]
    fn test_check_auth_ignores_output() {
        let mut config = test_config();
        config.auth.whoami_command = "echo some-identity".to_string();
        assert!(check_auth(&config, Duration::from_secs(5)));
    }

    #[test]
    fn test_check_kubeconfig_unset_is_absent() {
        let config = test_config();
        assert!(!check_kubeconfig(&config));
    }

    #[test]
    fn test_check_kubeconfig_present_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kubeconfig");
        std::fs::write(&path, "apiVersion: v1").unwrap();

        let mut config = test_config();
        config.kubeconfig_path = Some(path.clone());
        assert!(check_kubeconfig(&config));

        std::fs::remove_file(&path).unwrap();
        assert!(!check_kubeconfig(&config));
    }
}
