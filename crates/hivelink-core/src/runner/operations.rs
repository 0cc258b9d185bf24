use std::io::Read;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;
use tracing::{info, warn};

use crate::runner::errors::RunnerError;
use crate::runner::types::{
    BACKGROUND_STARTED_MESSAGE, BackgroundHandle, CommandResult, ExecutionMode, TIMEOUT_MESSAGE,
};

/// How often the timeout loop re-checks a running child.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Execute a shell command, classifying every outcome as a result value.
///
/// - Background mode: detached spawn, immediate success with
///   [`BACKGROUND_STARTED_MESSAGE`]; the child handle is dropped here (the
///   process keeps running). Callers that want to track the child use
///   [`run_detached`] directly.
/// - Foreground mode: [`run_with_timeout`].
///
/// This function never returns an error or panics across its boundary.
pub fn execute(command: &str, mode: ExecutionMode, timeout: Duration) -> CommandResult {
    match mode {
        ExecutionMode::Background => match run_detached(command) {
            Ok(_handle) => CommandResult::succeeded(BACKGROUND_STARTED_MESSAGE),
            Err(e) => CommandResult::failed(e.to_string()),
        },
        ExecutionMode::Foreground => run_with_timeout(command, timeout),
    }
}

/// Launch a command detached: stdio nulled, no output capture.
///
/// The returned handle carries the child so a caller can track it; the
/// eventual exit status is never reported anywhere.
pub fn run_detached(command: &str) -> Result<BackgroundHandle, RunnerError> {
    info!(event = "core.runner.detach_started", command = command);

    let child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            warn!(event = "core.runner.detach_failed", command = command, error = %e);
            RunnerError::SpawnFailed {
                message: e.to_string(),
            }
        })?;

    let handle = BackgroundHandle::new(child);
    info!(
        event = "core.runner.detach_completed",
        command = command,
        pid = handle.pid()
    );
    Ok(handle)
}

/// Run a command to completion or until `timeout` elapses.
///
/// Success iff the exit code is zero. Output is trimmed stdout when
/// non-empty, otherwise trimmed stderr. On timeout the child's whole
/// process group is killed and the result carries [`TIMEOUT_MESSAGE`].
/// Launch failures become failed results with the error description.
pub fn run_with_timeout(command: &str, timeout: Duration) -> CommandResult {
    info!(
        event = "core.runner.execute_started",
        command = command,
        timeout_secs = timeout.as_secs()
    );

    // The child leads its own process group so a timeout can take down
    // anything the shell forked, not just the shell itself.
    let mut child = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .process_group(0)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!(event = "core.runner.spawn_failed", command = command, error = %e);
            return CommandResult::failed(format!("Failed to launch command: {}", e));
        }
    };

    // Drain pipes on dedicated threads so a chatty child can't fill the
    // pipe buffer and stall forever under the try_wait loop.
    let stdout_reader = child.stdout.take().map(spawn_pipe_reader);
    let stderr_reader = child.stderr.take().map(spawn_pipe_reader);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    kill_group(child.id());
                    let _ = child.kill();
                    let _ = child.wait();
                    warn!(
                        event = "core.runner.execute_timed_out",
                        command = command,
                        timeout_secs = timeout.as_secs()
                    );
                    // Readers are dropped, not joined: a straggler still
                    // holding a pipe must not delay the return, and the
                    // output is unused on this path anyway.
                    return CommandResult::failed(TIMEOUT_MESSAGE);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                kill_group(child.id());
                let _ = child.kill();
                let _ = child.wait();
                warn!(event = "core.runner.wait_failed", command = command, error = %e);
                return CommandResult::failed(format!("Failed to wait for command: {}", e));
            }
        }
    };

    let stdout = join_pipe_reader(stdout_reader);
    let stderr = join_pipe_reader(stderr_reader);

    let success = status.success();
    let output = if stdout.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        stdout.trim().to_string()
    };
    info!(
        event = "core.runner.execute_completed",
        command = command,
        success = success,
        exit_code = status.code()
    );
    CommandResult { success, output }
}

/// Kill the process group led by `pid`. Best-effort: the group may already
/// be gone by the time the signal lands.
fn kill_group(pid: u32) {
    if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
        warn!(event = "core.runner.kill_group_failed", pid = pid, error = %e);
    }
}

fn spawn_pipe_reader<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        let _ = pipe.read_to_string(&mut buf);
        buf
    })
}

fn join_pipe_reader(reader: Option<thread::JoinHandle<String>>) -> String {
    reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}
