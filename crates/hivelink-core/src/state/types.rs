use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tri-state connection health shown to the user.
///
/// Derived from exactly two signals: tunnel process liveness and auth
/// validity. Kubeconfig presence is recorded alongside but never folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    /// Tunnel running and auth valid
    Connected,
    /// Exactly one of tunnel/auth healthy
    Partial,
    /// Neither signal healthy
    Disconnected,
}

impl HealthState {
    /// Derive health from the two probe signals.
    ///
    /// Pure function: the shared state never caches anything beyond the
    /// values computed from the last tick.
    pub fn derive(tunnel_running: bool, auth_valid: bool) -> Self {
        match (tunnel_running, auth_valid) {
            (true, true) => HealthState::Connected,
            (true, false) | (false, true) => HealthState::Partial,
            (false, false) => HealthState::Disconnected,
        }
    }

    pub fn status_icon(&self) -> &'static str {
        match self {
            HealthState::Connected => "🟢",
            HealthState::Partial => "🟡",
            HealthState::Disconnected => "🔴",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthState::Connected => write!(f, "connected"),
            HealthState::Partial => write!(f, "partial"),
            HealthState::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Severity of a supervisor log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// One entry in the bounded supervisor activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, level: LogLevel) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// Point-in-time view of the probe signals and derived health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub tunnel_running: bool,
    pub auth_valid: bool,
    /// Informational only; not part of the health derivation.
    pub kubeconfig_present: bool,
    pub health: HealthState,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            tunnel_running: false,
            auth_valid: false,
            kubeconfig_present: false,
            health: HealthState::Disconnected,
        }
    }
}
