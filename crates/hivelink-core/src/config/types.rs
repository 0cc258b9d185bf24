//! Configuration type definitions for Hivelink.
//!
//! All command strings here are opaque to the supervisor: they are handed to
//! the shell as-is and judged only by exit status and captured output.
//!
//! # Example Configuration
//!
//! ```toml
//! kubeconfig_path = "/Users/dev/clusters/hive01"
//!
//! [tunnel]
//! process_name = "sshuttle"
//! route_command = "sudo route add -net 10.164.0.0/16 -interface en0"
//! start_command = "sshuttle -r bastion.example.net 10.164.0.0/16"
//!
//! [auth]
//! whoami_command = "ocm whoami"
//! refresh_command = "ocm token"
//!
//! [probe]
//! interval_secs = 30
//! settle_delay_secs = 3
//! command_timeout_secs = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.hivelink/config.toml`
/// 2. Project config: `./.hivelink/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HivelinkConfig {
    /// Path to the kubeconfig whose presence is reported (informational only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig_path: Option<PathBuf>,

    /// Tunnel process and startup settings
    #[serde(default)]
    pub tunnel: TunnelConfig,

    /// Auth provider commands
    #[serde(default)]
    pub auth: AuthConfig,

    /// Environment setup command sequence
    #[serde(default)]
    pub setup: SetupConfig,

    /// Probe cadence and command timeout
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Console and token URLs
    #[serde(default)]
    pub links: LinksConfig,

    /// Desktop notification toggle
    #[serde(default)]
    pub notifications: NotifyConfig,
}

/// Tunnel process and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunnelConfig {
    /// Substring matched against running process names to decide liveness.
    #[serde(default = "super::defaults::default_tunnel_process_name")]
    pub process_name: String,

    /// Routing setup command run synchronously before the tunnel starts.
    /// When absent, connect goes straight to the tunnel command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_command: Option<String>,

    /// Command launched detached to start the tunnel.
    #[serde(default = "super::defaults::default_tunnel_start_command")]
    pub start_command: String,
}

/// Auth provider commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// "Who am I" command; exit status alone decides auth validity.
    #[serde(default = "super::defaults::default_whoami_command")]
    pub whoami_command: String,

    /// Token refresh command run by the refresh action.
    #[serde(default = "super::defaults::default_refresh_command")]
    pub refresh_command: String,
}

/// Ordered environment setup commands, run fail-fast by the setup action.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SetupConfig {
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Probe cadence and the synchronous command timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Seconds between periodic probe ticks.
    #[serde(default = "super::defaults::default_probe_interval_secs")]
    pub interval_secs: u64,

    /// Seconds to wait after a connect/refresh before the follow-up tick.
    #[serde(default = "super::defaults::default_settle_delay_secs")]
    pub settle_delay_secs: u64,

    /// Timeout in seconds for synchronous command execution.
    #[serde(default = "super::defaults::default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

impl ProbeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

/// Console and token page URLs opened on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,

    /// Program used to open URLs in the default browser.
    #[serde(default = "super::defaults::default_open_command")]
    pub open_command: String,
}

/// Desktop notification toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "super::defaults::default_notifications_enabled")]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = HivelinkConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: HivelinkConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.tunnel.process_name, parsed.tunnel.process_name);
        assert_eq!(config.probe.interval_secs, parsed.probe.interval_secs);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HivelinkConfig = toml::from_str("").unwrap();
        assert_eq!(config.tunnel.process_name, "sshuttle");
        assert_eq!(config.probe.interval_secs, 30);
        assert_eq!(config.probe.settle_delay_secs, 3);
        assert_eq!(config.probe.command_timeout_secs, 30);
        assert!(config.kubeconfig_path.is_none());
        assert!(config.setup.commands.is_empty());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml_str = r#"
kubeconfig_path = "/tmp/kubeconfig"

[tunnel]
process_name = "wireguard"

[probe]
interval_secs = 5
"#;
        let config: HivelinkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tunnel.process_name, "wireguard");
        assert_eq!(config.probe.interval_secs, 5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.probe.settle_delay_secs, 3);
        assert_eq!(config.auth.whoami_command, "ocm whoami");
        assert_eq!(
            config.kubeconfig_path,
            Some(PathBuf::from("/tmp/kubeconfig"))
        );
    }

    #[test]
    fn test_setup_commands_preserve_order() {
        let toml_str = r#"
[setup]
commands = ["first", "second", "third"]
"#;
        let config: HivelinkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.setup.commands, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_probe_durations() {
        let probe = ProbeConfig {
            interval_secs: 10,
            settle_delay_secs: 2,
            command_timeout_secs: 7,
        };
        assert_eq!(probe.interval(), Duration::from_secs(10));
        assert_eq!(probe.settle_delay(), Duration::from_secs(2));
        assert_eq!(probe.command_timeout(), Duration::from_secs(7));
    }
}
