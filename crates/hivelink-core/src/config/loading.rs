//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hivelink/config.toml` (global user preferences)
//! 3. **Project config** - `./.hivelink/config.toml` (project-specific overrides)

use std::fs;
use std::path::Path;

use crate::config::types::{HivelinkConfig, SetupConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Missing config files are not errors; parse and validation failures are.
pub fn load_hierarchy() -> Result<HivelinkConfig, ConfigError> {
    let mut config = HivelinkConfig::default();

    if let Some(home_dir) = dirs::home_dir() {
        let user_path = home_dir.join(".hivelink").join("config.toml");
        if let Some(user_config) = load_config_file(&user_path)? {
            config = merge_configs(config, user_config);
        }
    }

    let project_path = std::env::current_dir()
        .map(|cwd| cwd.join(".hivelink").join("config.toml"))
        .ok();
    if let Some(path) = project_path
        && let Some(project_config) = load_config_file(&path)?
    {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file, validating it in isolation.
///
/// Unlike [`load_hierarchy`], a missing file here is an error: the caller
/// asked for this specific path.
pub fn load_file(path: &Path) -> Result<HivelinkConfig, ConfigError> {
    let config = load_config_file(path)?.ok_or_else(|| ConfigError::ConfigNotFound {
        path: path.display().to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config file if it exists. `Ok(None)` means the file is absent.
fn load_config_file(path: &Path) -> Result<Option<HivelinkConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };
    let config: HivelinkConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional fields are replaced only when present in the override; sections
/// with serde defaults take the override's value wholesale, since TOML gives
/// no way to tell an explicit default from an omitted field.
pub fn merge_configs(base: HivelinkConfig, override_config: HivelinkConfig) -> HivelinkConfig {
    HivelinkConfig {
        kubeconfig_path: override_config.kubeconfig_path.or(base.kubeconfig_path),
        tunnel: crate::config::types::TunnelConfig {
            process_name: override_config.tunnel.process_name,
            route_command: override_config
                .tunnel
                .route_command
                .or(base.tunnel.route_command),
            start_command: override_config.tunnel.start_command,
        },
        auth: override_config.auth,
        setup: if override_config.setup.commands.is_empty() {
            base.setup
        } else {
            SetupConfig {
                commands: override_config.setup.commands,
            }
        },
        probe: override_config.probe,
        links: crate::config::types::LinksConfig {
            console_url: override_config.links.console_url.or(base.links.console_url),
            token_url: override_config.links.token_url.or(base.links.token_url),
            open_command: override_config.links.open_command,
        },
        notifications: override_config.notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_file_missing_is_none() {
        let result = load_config_file(Path::new("/nonexistent/hivelink/config.toml"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let err = load_file(Path::new("/nonexistent/hivelink/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_file_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[tunnel]\nprocess_name = \"wireguard\"").unwrap();

        let config = load_file(&path).unwrap();
        assert_eq!(config.tunnel.process_name, "wireguard");
    }

    #[test]
    fn test_load_file_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid { toml").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_file_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[probe]\ninterval_secs = 0\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_merge_override_wins_for_options() {
        let mut base = HivelinkConfig::default();
        base.kubeconfig_path = Some("/base/kubeconfig".into());
        base.links.console_url = Some("https://base.example/console".to_string());

        let mut override_config = HivelinkConfig::default();
        override_config.kubeconfig_path = Some("/override/kubeconfig".into());

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.kubeconfig_path, Some("/override/kubeconfig".into()));
        // Base survives where the override is silent
        assert_eq!(
            merged.links.console_url,
            Some("https://base.example/console".to_string())
        );
    }

    #[test]
    fn test_merge_setup_commands_keep_base_when_override_empty() {
        let mut base = HivelinkConfig::default();
        base.setup.commands = vec!["export FOO=1".to_string()];

        let merged = merge_configs(base, HivelinkConfig::default());
        assert_eq!(merged.setup.commands, vec!["export FOO=1"]);
    }
}
