use serde::{Deserialize, Serialize};

/// All user-triggered operations the supervisor can dispatch.
///
/// Each variant carries what the handler needs; owned types so actions can
/// be serialized and handed across host boundaries. The host maps its
/// surface (menu item, subcommand) to one of these explicitly — no
/// framework callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Action {
    /// Configure routing (if set) then start the tunnel detached.
    Connect,
    /// Refresh the auth token.
    RefreshToken,
    /// Run the configured environment setup sequence, fail-fast.
    SetupEnv,
    /// Run an arbitrary command synchronously.
    Custom { command: String },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Connect => write!(f, "connect"),
            Action::RefreshToken => write!(f, "refresh-token"),
            Action::SetupEnv => write!(f, "setup-env"),
            Action::Custom { command } => write!(f, "custom({})", command),
        }
    }
}
