use crate::errors::HivelinkError;

/// Internal runner failures.
///
/// These never cross the `execute` boundary — they are converted into
/// `CommandResult { success: false, .. }` values there — but the detached
/// spawn path exposes them to callers that track the child handle.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to launch command: {message}")]
    SpawnFailed { message: String },

    #[error("Failed to wait for command: {message}")]
    WaitFailed { message: String },
}

impl HivelinkError for RunnerError {
    fn error_code(&self) -> &'static str {
        match self {
            RunnerError::SpawnFailed { .. } => "RUNNER_SPAWN_FAILED",
            RunnerError::WaitFailed { .. } => "RUNNER_WAIT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_display() {
        let error = RunnerError::SpawnFailed {
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to launch command: No such file or directory"
        );
        assert_eq!(error.error_code(), "RUNNER_SPAWN_FAILED");
        assert!(!error.is_user_error());
    }
}
