//! # Configuration System
//!
//! Hierarchical TOML configuration for Hivelink.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hivelink/config.toml` (global user preferences)
//! 3. **Project config** - `./.hivelink/config.toml` (project-specific overrides)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hivelink_core::config::HivelinkConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HivelinkConfig::load_hierarchy()?;
//!     println!("tunnel process: {}", config.tunnel.process_name);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{
    AuthConfig, HivelinkConfig, LinksConfig, NotifyConfig, ProbeConfig, SetupConfig, TunnelConfig,
};
pub use validation::validate_config;

impl HivelinkConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Load configuration from a single explicit file.
    ///
    /// See [`loading::load_file`] for details.
    pub fn load_file(path: &std::path::Path) -> Result<Self, crate::errors::ConfigError> {
        loading::load_file(path)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
