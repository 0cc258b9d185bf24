//! The supervisor facade.
//!
//! Ties together config, shared state, the runner, the probe, and the
//! action handlers behind the four host entry points: execute a command,
//! tick the probe, append a log entry, read recent logs. Hosts dispatch
//! actions onto fresh background threads and receive the join handle; the
//! core never joins or cancels them.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::actions;
use crate::actions::types::Action;
use crate::config::HivelinkConfig;
use crate::probe;
use crate::runner;
use crate::runner::types::{BackgroundRegistry, CommandResult, ExecutionMode};
use crate::state::SupervisorState;
use crate::state::types::{HealthState, LogEntry, LogLevel, StatusSnapshot};

/// Supervisor over tunnel status and command execution.
///
/// Cheap to clone: all shared pieces sit behind `Arc`, so a clone can move
/// into a dispatched thread while the host keeps its own.
#[derive(Clone)]
pub struct Supervisor {
    config: Arc<HivelinkConfig>,
    state: Arc<SupervisorState>,
    registry: Arc<BackgroundRegistry>,
}

impl Supervisor {
    pub fn new(config: HivelinkConfig) -> Self {
        Self {
            config: Arc::new(config),
            state: Arc::new(SupervisorState::new()),
            registry: Arc::new(BackgroundRegistry::new()),
        }
    }

    pub fn config(&self) -> &HivelinkConfig {
        &self.config
    }

    /// Run one probe tick and return the derived health.
    pub fn tick(&self) -> HealthState {
        probe::run_probe(&self.config, &self.state)
    }

    /// Execute an opaque command.
    ///
    /// `timeout` of `None` uses the configured command timeout. Background
    /// children are tracked in the registry. Infallible: every failure mode
    /// comes back as a failed [`CommandResult`].
    pub fn execute(
        &self,
        command: &str,
        mode: ExecutionMode,
        timeout: Option<Duration>,
    ) -> CommandResult {
        match mode {
            ExecutionMode::Background => match runner::run_detached(command) {
                Ok(handle) => {
                    self.registry.track(handle);
                    CommandResult::succeeded(runner::BACKGROUND_STARTED_MESSAGE)
                }
                Err(e) => CommandResult::failed(e.to_string()),
            },
            ExecutionMode::Foreground => {
                let timeout = timeout.unwrap_or_else(|| self.config.probe.command_timeout());
                runner::execute(command, mode, timeout)
            }
        }
    }

    pub fn append_log(&self, message: impl Into<String>, level: LogLevel) {
        self.state.append_log(message, level);
    }

    pub fn recent_logs(&self, n: usize) -> Vec<LogEntry> {
        self.state.recent_logs(n)
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.state.snapshot()
    }

    /// PIDs of detached children started by this supervisor.
    pub fn background_pids(&self) -> Vec<u32> {
        self.registry.pids()
    }

    /// Connect on the calling thread. Returns `false` when routing setup
    /// short-circuited the sequence.
    pub fn connect_blocking(&self) -> bool {
        actions::connect(&self.config, &self.state, &self.registry)
    }

    /// Refresh the auth token on the calling thread.
    pub fn refresh_blocking(&self) -> CommandResult {
        actions::refresh_token(&self.config, &self.state)
    }

    /// Run the setup sequence on the calling thread. Returns `true` only if
    /// every command succeeded.
    pub fn setup_blocking(&self) -> bool {
        actions::setup_env(&self.config, &self.state)
    }

    /// Run a custom command on the calling thread.
    pub fn custom_blocking(&self, command: &str) -> CommandResult {
        actions::run_custom(&self.config, &self.state, command)
    }

    /// Open the configured console URL.
    pub fn open_console(&self) -> CommandResult {
        actions::open_console(&self.config, &self.state)
    }

    /// Open the configured token page URL.
    pub fn open_token_page(&self) -> CommandResult {
        actions::open_token_page(&self.config, &self.state)
    }

    /// Run an action to completion on the calling thread.
    pub fn dispatch_blocking(&self, action: Action) {
        match action {
            Action::Connect => {
                self.connect_blocking();
            }
            Action::RefreshToken => {
                self.refresh_blocking();
            }
            Action::SetupEnv => {
                self.setup_blocking();
            }
            Action::Custom { command } => {
                self.custom_blocking(&command);
            }
        }
    }

    /// Dispatch an action onto a fresh background thread.
    ///
    /// One short-lived thread per action, run-to-completion. The handle is
    /// returned for hosts that want it; dropping it detaches the thread.
    /// No ordering is guaranteed between concurrently dispatched actions.
    pub fn dispatch(&self, action: Action) -> thread::JoinHandle<()> {
        let supervisor = self.clone();
        thread::spawn(move || supervisor.dispatch_blocking(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_supervisor() -> Supervisor {
        let mut config = HivelinkConfig::default();
        config.notifications.enabled = false;
        config.tunnel.process_name = "nonexistent-tunnel-xyz".to_string();
        config.auth.whoami_command = "true".to_string();
        config.auth.refresh_command = "true".to_string();
        config.probe.command_timeout_secs = 5;
        config.probe.settle_delay_secs = 0;
        Supervisor::new(config)
    }

    #[test]
    fn test_tick_returns_health_and_updates_snapshot() {
        let supervisor = test_supervisor();
        let health = supervisor.tick();
        assert_eq!(health, HealthState::Partial);
        assert_eq!(supervisor.snapshot().health, HealthState::Partial);
    }

    #[test]
    fn test_execute_uses_configured_timeout_by_default() {
        let supervisor = test_supervisor();
        let result = supervisor.execute("echo ok", ExecutionMode::Foreground, None);
        assert!(result.success);
        assert_eq!(result.output, "ok");
    }

    #[test]
    fn test_execute_explicit_timeout() {
        let supervisor = test_supervisor();
        let result = supervisor.execute(
            "sleep 10",
            ExecutionMode::Foreground,
            Some(Duration::from_millis(100)),
        );
        assert!(!result.success);
        assert_eq!(result.output, runner::TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_background_execute_registers_child() {
        let supervisor = test_supervisor();
        let result = supervisor.execute("sleep 2", ExecutionMode::Background, None);
        assert!(result.success);
        assert_eq!(result.output, runner::BACKGROUND_STARTED_MESSAGE);

        let pids = supervisor.background_pids();
        assert_eq!(pids.len(), 1);
        assert!(pids[0] > 0);
    }

    #[test]
    fn test_log_entry_points() {
        let supervisor = test_supervisor();
        supervisor.append_log("host message", LogLevel::Info);
        let logs = supervisor.recent_logs(5);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "host message");
    }

    #[test]
    fn test_dispatch_refresh_runs_to_completion() {
        let supervisor = test_supervisor();
        let handle = supervisor.dispatch(Action::RefreshToken);
        handle.join().unwrap();

        let logs = supervisor.recent_logs(10);
        assert!(logs.iter().any(|entry| entry.message == "Auth token refreshed"));
        // Action triggered a re-probe
        assert!(supervisor.snapshot().auth_valid);
    }

    #[test]
    fn test_dispatch_custom_command() {
        let supervisor = test_supervisor();
        supervisor
            .dispatch(Action::Custom {
                command: "echo from-dispatch".to_string(),
            })
            .join()
            .unwrap();

        let logs = supervisor.recent_logs(10);
        assert!(
            logs.iter()
                .any(|entry| entry.message.contains("from-dispatch"))
        );
    }

    #[test]
    fn test_concurrent_dispatches_both_complete() {
        let supervisor = test_supervisor();
        let first = supervisor.dispatch(Action::Custom {
            command: "echo one".to_string(),
        });
        let second = supervisor.dispatch(Action::Custom {
            command: "echo two".to_string(),
        });
        first.join().unwrap();
        second.join().unwrap();

        let logs = supervisor.recent_logs(20);
        assert!(logs.iter().any(|entry| entry.message.contains("one")));
        assert!(logs.iter().any(|entry| entry.message.contains("two")));
    }

    #[test]
    fn test_clone_shares_state() {
        let supervisor = test_supervisor();
        let clone = supervisor.clone();
        clone.append_log("via clone", LogLevel::Info);
        assert_eq!(supervisor.recent_logs(5).len(), 1);
    }
}
