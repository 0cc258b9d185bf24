use std::sync::{LazyLock, Mutex};

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::types::ProcessInfo;

// Shared system instance so repeated probe ticks reuse one process table
static SYSTEM: LazyLock<Mutex<System>> = LazyLock::new(|| Mutex::new(System::new()));

/// Minimum pattern length for substring matching, to keep short patterns
/// like "sh" from matching half the process table.
const MIN_PATTERN_LENGTH: usize = 3;

/// Find a process whose name or command line contains the given substring.
///
/// Matching is deliberately loose (substring over name and full command
/// line) because tunnel processes often run under an interpreter: an
/// `sshuttle` tunnel shows up as `python3 /usr/bin/sshuttle -r ...`, where
/// only the command line carries the name.
pub fn find_process_by_name(pattern: &str) -> Result<Option<ProcessInfo>, ProcessError> {
    let pattern = pattern.trim();
    if pattern.len() < MIN_PATTERN_LENGTH {
        return Err(ProcessError::PatternTooShort {
            pattern: pattern.to_string(),
        });
    }

    let mut system = SYSTEM.lock().map_err(|e| ProcessError::SystemError {
        message: format!("Process table lock poisoned: {}", e),
    })?;
    system.refresh_processes(ProcessesToUpdate::All, true);

    for (pid, process) in system.processes() {
        let process_name = process.name().to_string_lossy();
        if process_name.contains(pattern) {
            return Ok(Some(ProcessInfo {
                pid: pid.as_u32(),
                name: process_name.to_string(),
            }));
        }

        let cmd_line = process
            .cmd()
            .iter()
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        if cmd_line.contains(pattern) {
            debug!(
                event = "core.process.matched_via_cmdline",
                pid = pid.as_u32(),
                pattern = pattern
            );
            return Ok(Some(ProcessInfo {
                pid: pid.as_u32(),
                name: process_name.to_string(),
            }));
        }
    }

    Ok(None)
}

/// Check whether any process matching the pattern is currently running.
pub fn is_process_running_by_name(pattern: &str) -> Result<bool, ProcessError> {
    Ok(find_process_by_name(pattern)?.is_some())
}
