//! hivelink-core: Core library for tunnel and auth status supervision
//!
//! This library provides the business logic behind Hivelink: running opaque
//! shell commands with timeout and success/failure classification, probing
//! connection health from independent signals, and keeping a bounded in-memory
//! activity log. It is used by the CLI host and carries no UI dependency.
//!
//! # Main Entry Points
//!
//! - [`supervisor`] - Facade tying config, runner, probe, and shared state
//! - [`actions`] - Connect, refresh, setup, and custom command orchestration
//! - [`probe`] - Tri-state health derivation from tunnel/auth/kubeconfig checks
//! - [`runner`] - Shell command execution with timeout
//! - [`config`] - Configuration management

pub mod actions;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod probe;
pub mod process;
pub mod runner;
pub mod state;
pub mod supervisor;

// Re-export commonly used types at crate root for convenience
pub use actions::types::Action;
pub use config::HivelinkConfig;
pub use runner::types::{CommandResult, ExecutionMode};
pub use state::types::{HealthState, LogEntry, LogLevel, StatusSnapshot};
pub use state::SupervisorState;
pub use supervisor::Supervisor;

// Re-export handler modules as the primary API
pub use actions::handler as action_ops;
pub use probe::handler as probe_ops;

// Re-export logging initialization
pub use logging::init_logging;
