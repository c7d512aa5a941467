//! Error types for wrap-shell operations.
//!
//! This module defines [`WrapShellError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal: the launcher's only job is to become another
//!   process, so errors propagate straight up to `main`, which prints a single
//!   line and exits with code 1
//! - Every variant names what failed (the shell kind, the binary or the
//!   config file) so the single line is actionable on its own

use std::path::PathBuf;
use thiserror::Error;

use crate::shell::ShellKind;

/// Core error type for wrap-shell operations.
#[derive(Debug, Error)]
pub enum WrapShellError {
    /// A requested shell kind could not be resolved to a binary.
    #[error("Unable to find shell: {kind}")]
    ShellNotFound { kind: ShellKind },

    /// xonsh was requested but no usable python interpreter exists.
    #[error(
        "Unable to detect system python (use a standard location or specify explicitly with --python-bin)"
    )]
    InterpreterNotFound,

    /// Two mutually exclusive preferences were requested together.
    #[error("Flags --{first} and --{second} are incompatible")]
    IncompatibleFlags {
        first: &'static str,
        second: &'static str,
    },

    /// The supervisor could not fork.
    #[error("fork: {source}")]
    ForkFailed {
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the primary shell failed for a reason other than a signal.
    #[error("Failed to wait for subprocess: {source} (this is most likely an internal error)")]
    WaitFailed {
        #[source]
        source: std::io::Error,
    },

    /// `waitpid` reported a different process than the one being supervised.
    #[error("Unexpected result from waitpid: {actual} (expected {expected})")]
    UnexpectedChild { expected: i32, actual: i32 },

    /// The OS refused to replace the process image.
    #[error("Unexpected error executing shell {}: {source}", path.display())]
    ExecFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but could not be read.
    #[error("Failed to read config at {}: {source}", path.display())]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },
}

/// Result type alias for wrap-shell operations.
pub type Result<T> = std::result::Result<T, WrapShellError>;
