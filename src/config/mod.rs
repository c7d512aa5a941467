//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use wrap_shell::config::{load_config, ShellPreference};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "shell: fish").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.shell, ShellPreference::Fish);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, user_config_path, CONFIG_ENV_VAR};
pub use schema::{ShellPreference, WrapShellConfig};
