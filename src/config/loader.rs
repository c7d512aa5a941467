//! Configuration file discovery and loading.
//!
//! The configuration file is optional. Its location is, in priority order:
//! 1. `--config <PATH>` or `$WRAP_SHELL_CONFIG`
//! 2. User config (`~/.wrap-shell/config.yml`)
//!
//! An explicitly named file must exist; the user config may be absent.

use crate::config::schema::WrapShellConfig;
use crate::error::{Result, WrapShellError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WRAP_SHELL_CONFIG";

/// Location of the user's config file: ~/.wrap-shell/config.yml
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".wrap-shell").join("config.yml"))
}

/// Load the configuration.
///
/// With `explicit` set, that file is required. Otherwise the user config is
/// read if it exists and defaults are used if it does not.
pub fn load_config(explicit: Option<&Path>) -> Result<WrapShellConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(WrapShellError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_config_file(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => {
            tracing::debug!("No config file, using defaults");
            Ok(WrapShellConfig::default())
        }
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<WrapShellConfig> {
    let content = fs::read_to_string(path).map_err(|source| WrapShellError::ConfigReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, path)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into a config. An empty document yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<WrapShellConfig> {
    if content.trim().is_empty() {
        return Ok(WrapShellConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| WrapShellError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
