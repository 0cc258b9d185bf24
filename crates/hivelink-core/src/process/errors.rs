use crate::errors::HivelinkError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Process name pattern '{pattern}' is too short to match safely")]
    PatternTooShort { pattern: String },

    #[error("System error: {message}")]
    SystemError { message: String },
}

impl HivelinkError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::PatternTooShort { .. } => "PROCESS_PATTERN_TOO_SHORT",
            ProcessError::SystemError { .. } => "PROCESS_SYSTEM_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProcessError::PatternTooShort { .. })
    }
}
