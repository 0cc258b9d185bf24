pub mod store;
pub mod types;

pub use store::{MAX_LOG_ENTRIES, SupervisorState};
pub use types::{HealthState, LogEntry, LogLevel, StatusSnapshot};
