//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`]. wrap-shell has no
//! subcommands; `--completions` selects [`CompletionsCommand`] and everything
//! else launches a shell through [`LaunchCommand`].

pub mod completions;
pub mod dispatcher;
pub mod launch;

pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use launch::{LaunchCommand, LaunchPlan};
