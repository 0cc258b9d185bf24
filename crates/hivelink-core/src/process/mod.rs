pub mod errors;
pub mod operations;
pub mod types;

pub use errors::ProcessError;
pub use operations::{find_process_by_name, is_process_running_by_name};
pub use types::ProcessInfo;
