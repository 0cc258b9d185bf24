//! Configuration validation.
//!
//! Validation runs after merging so the error reflects the effective
//! configuration, not any single file.

use crate::config::types::HivelinkConfig;
use crate::errors::ConfigError;

/// Minimum length for the tunnel process name substring.
///
/// Shorter patterns ("sh", "go") would match unrelated processes and report
/// a tunnel that is not there.
const MIN_PROCESS_NAME_LENGTH: usize = 3;

/// Validate the merged configuration.
pub fn validate_config(config: &HivelinkConfig) -> Result<(), ConfigError> {
    if config.probe.interval_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "probe.interval_secs must be greater than zero".to_string(),
        });
    }

    if config.probe.command_timeout_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "probe.command_timeout_secs must be greater than zero".to_string(),
        });
    }

    let process_name = config.tunnel.process_name.trim();
    if process_name.len() < MIN_PROCESS_NAME_LENGTH {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "tunnel.process_name '{}' is too short (minimum {} characters)",
                config.tunnel.process_name, MIN_PROCESS_NAME_LENGTH
            ),
        });
    }

    if config.tunnel.start_command.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "tunnel.start_command must not be empty".to_string(),
        });
    }

    if config.auth.whoami_command.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "auth.whoami_command must not be empty".to_string(),
        });
    }

    if config
        .setup
        .commands
        .iter()
        .any(|cmd| cmd.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "setup.commands must not contain empty entries".to_string(),
        });
    }

    Ok(())
}
