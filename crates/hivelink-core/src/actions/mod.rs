//! User-triggered action orchestration.
//!
//! Thin fixed sequences over the runner and the probe: connect, token
//! refresh, environment setup, and custom commands. Ordering and
//! short-circuit semantics live here; everything else is delegation.

pub mod handler;
pub mod types;

pub use handler::{connect, open_console, open_token_page, refresh_token, run_custom, setup_env};
pub use types::Action;
