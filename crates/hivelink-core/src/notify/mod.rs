//! Platform-native desktop notification dispatch.
//!
//! Best-effort notifications — failures are logged but never propagate.
//! Action handlers use these to surface connect/refresh/setup outcomes;
//! the config toggle (`[notifications] enabled`) silences them entirely.

use tracing::{info, warn};

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
use tracing::debug;

use crate::config::HivelinkConfig;

/// Send a desktop notification if notifications are enabled (best-effort).
///
/// - macOS: `osascript` (Notification Center)
/// - Linux: `notify-send` (requires libnotify)
/// - Other: no-op
///
/// Failures are logged at warn level but never returned as errors.
pub fn notify(config: &HivelinkConfig, title: &str, message: &str) {
    if !config.notifications.enabled {
        return;
    }

    info!(
        event = "core.notify.send_started",
        title = title,
        message = message,
    );

    send_platform_notification(title, message);
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
#[cfg(target_os = "macos")]
fn applescript_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(target_os = "macos")]
fn send_platform_notification(title: &str, message: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        applescript_escape(message),
        applescript_escape(title)
    );

    match std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(target_os = "linux")]
fn send_platform_notification(title: &str, message: &str) {
    match std::process::Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send_platform_notification(title: &str, _message: &str) {
    debug!(
        event = "core.notify.send_skipped_unsupported_platform",
        title = title
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_disabled_is_silent() {
        let mut config = HivelinkConfig::default();
        config.notifications.enabled = false;
        // Must not panic, must not attempt the platform command
        notify(&config, "Hivelink", "test message");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_applescript_escape() {
        assert_eq!(applescript_escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(applescript_escape(r"back\slash"), r"back\\slash");
    }
}
