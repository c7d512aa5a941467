//! Command-line interface for wrap-shell.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{is_informational, parse_error_message, Cli, ParsedFlags};
pub use commands::{Command, CommandDispatcher, CommandResult, LaunchCommand, LaunchPlan};
