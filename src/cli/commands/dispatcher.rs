//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed command line

use std::process::ExitCode;

use crate::cli::args::{Cli, ParsedFlags};
use crate::config::WrapShellConfig;
use crate::error::Result;
use crate::search::PathResolver;
use crate::shell::SystemProcesses;

use super::completions::CompletionsCommand;
use super::launch::LaunchCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code. Commands
    /// that replace the process only return on failure.
    fn execute(&mut self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

impl From<CommandResult> for ExitCode {
    /// Codes outside `0..=255` cannot be reported faithfully and become 1.
    fn from(result: CommandResult) -> Self {
        ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1))
    }
}

/// Dispatches the command line to its implementation.
pub struct CommandDispatcher {
    config: WrapShellConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the loaded configuration.
    pub fn new(config: WrapShellConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute();
        }

        let flags = ParsedFlags::from_cli(cli).with_config(&self.config);
        let mut cmd = LaunchCommand::new(flags, PathResolver::from_env(), SystemProcesses::new())
            .dry_run(cli.dry_run);
        cmd.execute()
    }
}
