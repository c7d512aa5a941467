//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct, which is folded together with
//! the config file into [`ParsedFlags`].

use clap::error::ErrorKind;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{WrapShellConfig, CONFIG_ENV_VAR};
use crate::error::{Result, WrapShellError};
use crate::shell::ShellKind;

const LONG_ABOUT: &str = "wrap-shell - The simple shell manager

Will find and run the user's preferred shell, with an optional fallback
Source: https://github.com/Techcable/wrap-shell";

/// wrap-shell - The simple shell manager
#[derive(Debug, Parser)]
#[command(name = "wrap-shell")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Attempts to find and run `xonsh` instead of the user's default shell
    #[arg(short = 'x', long = "prefer-xonsh", visible_alias = "xonsh")]
    pub prefer_xonsh: bool,

    /// Attempts to find and run `fish` instead of the user's default shell
    #[arg(long = "prefer-fish", visible_alias = "fish")]
    pub prefer_fish: bool,

    /// Print verbose information
    #[arg(short, long)]
    pub verbose: bool,

    /// After the shell exits, fallback to running `zsh`
    #[arg(short = 'f', long = "fallback-to-zsh", visible_alias = "fallback")]
    pub fallback_to_zsh: bool,

    /// The path to the python binary to use for xonsh
    #[arg(long, value_name = "PATH", env = "WRAP_SHELL_PYTHON_BIN")]
    pub python_bin: Option<PathBuf>,

    /// Print the resolved launch plan instead of launching
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file (overrides ~/.wrap-shell/config.yml)
    #[arg(long, value_name = "PATH", env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Launch preferences after merging flags with the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    pub prefer_xonsh: bool,
    pub prefer_fish: bool,
    pub verbose: bool,
    pub fallback_to_zsh: bool,
    pub python_bin: Option<PathBuf>,
}

impl ParsedFlags {
    /// Flags exactly as given on the command line.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            prefer_xonsh: cli.prefer_xonsh,
            prefer_fish: cli.prefer_fish,
            verbose: cli.verbose,
            fallback_to_zsh: cli.fallback_to_zsh,
            python_bin: cli.python_bin.clone(),
        }
    }

    /// Fill in anything the command line left unset from `config`.
    ///
    /// A preference flag on the command line overrides `shell:` entirely.
    pub fn with_config(mut self, config: &WrapShellConfig) -> Self {
        if !self.prefer_xonsh && !self.prefer_fish {
            match config.shell.kind() {
                ShellKind::Xonsh => self.prefer_xonsh = true,
                ShellKind::Fish => self.prefer_fish = true,
                _ => {}
            }
        }
        self.verbose |= config.verbose;
        self.fallback_to_zsh |= config.fallback_to_zsh;
        if self.python_bin.is_none() {
            self.python_bin = config.python_bin.clone();
        }
        self
    }

    /// The shell kind to detect, rejecting contradictory preferences.
    pub fn preferred_kind(&self) -> Result<ShellKind> {
        match (self.prefer_xonsh, self.prefer_fish) {
            (true, true) => Err(WrapShellError::IncompatibleFlags {
                first: "fish",
                second: "xonsh",
            }),
            (true, false) => Ok(ShellKind::Xonsh),
            (false, true) => Ok(ShellKind::Fish),
            (false, false) => Ok(ShellKind::Zsh),
        }
    }

    /// Whether launching `primary` needs a supervising parent.
    ///
    /// Falling back from zsh to zsh would be pointless, so zsh is never supervised.
    pub fn needs_fallback(&self, primary: ShellKind) -> bool {
        self.fallback_to_zsh && primary != ShellKind::Zsh
    }
}

/// Whether a parse "error" is really a request for help or version output.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// One-line description of a parse failure.
pub fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
