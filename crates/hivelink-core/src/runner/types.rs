use std::process::Child;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Message reported when a command is launched detached.
pub const BACKGROUND_STARTED_MESSAGE: &str = "started in background";

/// Message reported when a synchronous command exceeds its timeout.
pub const TIMEOUT_MESSAGE: &str = "execution timed out";

/// How a command should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Run to completion (or timeout) with captured output.
    Foreground,
    /// Fire-and-forget: detached spawn, no output capture, exit status
    /// never reported.
    Background,
}

/// Outcome of one command execution.
///
/// Every failure mode (launch failure, non-zero exit, timeout) is reported
/// through this pair; callers must check `success` explicitly. The variants
/// are distinguished only by message text, never structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
}

impl CommandResult {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Handle to a detached background child.
///
/// Nothing reads this today — background exit status is deliberately never
/// reported — but the child is retained so cancellation could be added
/// without redesigning the runner. Dropping the handle does not kill the
/// child.
#[derive(Debug)]
pub struct BackgroundHandle {
    pid: u32,
    child: Child,
}

impl BackgroundHandle {
    pub(crate) fn new(child: Child) -> Self {
        Self {
            pid: child.id(),
            child,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Reap the child if it has already exited, without blocking.
    ///
    /// Returns `true` if the child is still running.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}

/// Tracked collection of detached children spawned by this supervisor.
#[derive(Debug, Default)]
pub struct BackgroundRegistry {
    children: Mutex<Vec<BackgroundHandle>>,
}

impl BackgroundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, handle: BackgroundHandle) {
        self.children
            .lock()
            .expect("background registry lock poisoned")
            .push(handle);
    }

    pub fn pids(&self) -> Vec<u32> {
        self.children
            .lock()
            .expect("background registry lock poisoned")
            .iter()
            .map(|h| h.pid())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.children
            .lock()
            .expect("background registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_constructors() {
        let ok = CommandResult::succeeded("done");
        assert!(ok.success);
        assert_eq!(ok.output, "done");

        let failed = CommandResult::failed("boom");
        assert!(!failed.success);
        assert_eq!(failed.output, "boom");
    }

    #[test]
    fn test_command_result_serde_roundtrip() {
        let result = CommandResult::failed(TIMEOUT_MESSAGE);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CommandResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_registry_tracks_handles() {
        let registry = BackgroundRegistry::new();
        assert!(registry.is_empty());

        let child = std::process::Command::new("sleep")
            .arg("0.1")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .expect("Failed to spawn test process");
        let pid = child.id();
        registry.track(BackgroundHandle::new(child));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.pids(), vec![pid]);
    }
}
