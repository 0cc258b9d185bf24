//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{AuthConfig, LinksConfig, NotifyConfig, ProbeConfig, TunnelConfig};

/// Returns the default tunnel process name ("sshuttle").
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_tunnel_process_name() -> String {
    "sshuttle".to_string()
}

/// Returns the default tunnel start command.
///
/// A placeholder that users are expected to override with their bastion
/// host and subnet.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_tunnel_start_command() -> String {
    "sshuttle -r bastion.example.net 10.164.0.0/16".to_string()
}

/// Returns the default auth "whoami" command.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_whoami_command() -> String {
    "ocm whoami".to_string()
}

/// Returns the default token refresh command.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_refresh_command() -> String {
    "ocm token".to_string()
}

/// Returns the default probe interval in seconds (30).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_probe_interval_secs() -> u64 {
    30
}

/// Returns the default settle delay in seconds (3).
///
/// Connect and refresh schedule a follow-up probe after this delay so a
/// freshly started tunnel has a moment to appear in the process table.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_settle_delay_secs() -> u64 {
    3
}

/// Returns the default synchronous command timeout in seconds (30).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_command_timeout_secs() -> u64 {
    30
}

/// Returns the platform URL-opener program.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_open_command() -> String {
    if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}

/// Returns whether desktop notifications default to enabled (true).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_notifications_enabled() -> bool {
    true
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            process_name: default_tunnel_process_name(),
            route_command: None,
            start_command: default_tunnel_start_command(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            whoami_command: default_whoami_command(),
            refresh_command: default_refresh_command(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_probe_interval_secs(),
            settle_delay_secs: default_settle_delay_secs(),
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            console_url: None,
            token_url: None,
            open_command: default_open_command(),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: default_notifications_enabled(),
        }
    }
}
