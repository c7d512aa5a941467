//! wrap-shell - The simple shell manager.
//!
//! Finds the user's preferred interactive shell and replaces the current
//! process with it. With `--fallback-to-zsh`, the preferred shell runs in a
//! supervised child instead and the launcher becomes `zsh` once it exits.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`search`] - Executable lookup across bin directories
//! - [`shell`] - Shell detection, exec and fallback supervision
//! - [`ui`] - Terminal diagnostics
//!
//! # Example
//!
//! ```
//! use wrap_shell::search::join_path;
//!
//! assert_eq!(join_path("/usr/bin", "zsh"), "/usr/bin/zsh");
//! assert_eq!(join_path("/usr/bin", "/bin/zsh"), "/bin/zsh");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod shell;
pub mod ui;

pub use error::{Result, WrapShellError};
