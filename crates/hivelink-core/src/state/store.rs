use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::debug;

use crate::state::types::{HealthState, LogEntry, LogLevel, StatusSnapshot};

/// Maximum number of log entries retained; oldest are evicted on overflow.
pub const MAX_LOG_ENTRIES: usize = 50;

struct StateInner {
    status: StatusSnapshot,
    logs: VecDeque<LogEntry>,
}

/// Lock-guarded supervisor state shared between the probe, the action
/// handlers, and the host.
///
/// All cross-thread state lives behind a single mutex: the probe booleans,
/// the derived health, and the bounded activity log. Racing writers are
/// acceptable (last write wins) because every read is for display only, but
/// append-and-trim of the log happens under the lock so a reader can never
/// observe a torn ring.
pub struct SupervisorState {
    inner: Mutex<StateInner>,
}

impl SupervisorState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StateInner {
                status: StatusSnapshot::default(),
                logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            }),
        }
    }

    /// Publish a fresh set of probe signals, recomputing health.
    ///
    /// Returns the snapshot that was stored.
    pub fn update_status(
        &self,
        tunnel_running: bool,
        auth_valid: bool,
        kubeconfig_present: bool,
    ) -> StatusSnapshot {
        let snapshot = StatusSnapshot {
            tunnel_running,
            auth_valid,
            kubeconfig_present,
            health: HealthState::derive(tunnel_running, auth_valid),
        };
        let mut inner = self.inner.lock().expect("supervisor state lock poisoned");
        inner.status = snapshot;
        snapshot
    }

    /// Current signals and derived health as of the last probe tick.
    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner
            .lock()
            .expect("supervisor state lock poisoned")
            .status
    }

    /// Append a log entry, evicting the oldest entry past capacity.
    pub fn append_log(&self, message: impl Into<String>, level: LogLevel) {
        let entry = LogEntry::new(message, level);
        debug!(
            event = "core.state.log_appended",
            level = %entry.level,
            message = %entry.message
        );
        let mut inner = self.inner.lock().expect("supervisor state lock poisoned");
        inner.logs.push_back(entry);
        while inner.logs.len() > MAX_LOG_ENTRIES {
            inner.logs.pop_front();
        }
    }

    /// The most recent `n` log entries in chronological order.
    pub fn recent_logs(&self, n: usize) -> Vec<LogEntry> {
        let inner = self.inner.lock().expect("supervisor state lock poisoned");
        let skip = inner.logs.len().saturating_sub(n);
        inner.logs.iter().skip(skip).cloned().collect()
    }

    /// Total entries currently retained (at most [`MAX_LOG_ENTRIES`]).
    pub fn log_count(&self) -> usize {
        self.inner
            .lock()
            .expect("supervisor state lock poisoned")
            .logs
            .len()
    }
}

impl Default for SupervisorState {
    fn default() -> Self {
        Self::new()
    }
}
