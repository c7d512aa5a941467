//! Shell completions generation.
//!
//! `wrap-shell --completions <SHELL>` prints a completion script to stdout.

use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Write the completion script to `out`.
    pub fn generate(&self, out: &mut dyn std::io::Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "wrap-shell", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&mut self) -> crate::error::Result<CommandResult> {
        self.generate(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
