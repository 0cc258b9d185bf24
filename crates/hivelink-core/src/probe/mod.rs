//! Connection health probing.
//!
//! One tick evaluates three independent signals (tunnel process liveness,
//! auth whoami validity, kubeconfig presence) and derives the tri-state
//! health indicator from the first two.

pub mod handler;
pub mod operations;

pub use handler::run_probe;
pub use operations::{check_auth, check_kubeconfig, check_tunnel};
