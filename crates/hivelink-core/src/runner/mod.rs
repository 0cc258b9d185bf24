//! Shell command execution with timeout and success/failure classification.
//!
//! Commands are opaque strings handed to `sh -c`. The public boundary is
//! infallible: launch failures, non-zero exits, and timeouts all come back
//! as `CommandResult { success: false, .. }` with a descriptive message.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::RunnerError;
pub use operations::{execute, run_detached, run_with_timeout};
pub use types::{
    BACKGROUND_STARTED_MESSAGE, BackgroundHandle, BackgroundRegistry, CommandResult, ExecutionMode,
    TIMEOUT_MESSAGE,
};
