//! Process-image replacement.
//!
//! On Unix the launcher `exec`s the shell, so the shell inherits the
//! launcher's pid, environment, working directory and standard streams.
//! Elsewhere the shell is spawned as a child and its exit code is propagated.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, WrapShellError};

use super::descriptor::{LaunchDescriptor, MAX_SHELL_ARGS};

/// Replace the current process with `shell`.
///
/// Only returns on error: success means the old process image is gone.
///
/// # Panics
///
/// Panics if `shell` is missing or its argument vector is out of range. The
/// caller is responsible for checking detection results first.
#[cfg(unix)]
pub fn exec_shell(shell: &LaunchDescriptor) -> Result<()> {
    use std::os::unix::process::CommandExt;
    use std::process::Command;

    let binary = launch_target(shell);
    flush_diagnostics();

    tracing::debug!("exec {} {:?}", binary.display(), shell.args());
    let err = Command::new(program_path(binary))
        .arg0(binary)
        .args(shell.args())
        .exec();

    Err(WrapShellError::ExecFailed {
        path: binary.to_path_buf(),
        source: err,
    })
}

/// Run `shell` as a child and exit with its code.
#[cfg(not(unix))]
pub fn exec_shell(shell: &LaunchDescriptor) -> Result<()> {
    use std::process::{Command, Stdio};

    let binary = launch_target(shell);
    flush_diagnostics();

    let status = Command::new(program_path(binary))
        .args(shell.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| WrapShellError::ExecFailed {
            path: binary.to_path_buf(),
            source,
        })?;

    std::process::exit(status.code().unwrap_or(1));
}

fn launch_target(shell: &LaunchDescriptor) -> &Path {
    let argc = shell.argc();
    assert!(
        (1..MAX_SHELL_ARGS).contains(&argc),
        "invalid argc {} for {}",
        argc,
        shell.kind()
    );
    match shell.binary_path() {
        Some(binary) => binary,
        None => panic!("attempted to launch a missing shell"),
    }
}

/// The path handed to the OS for `binary`.
///
/// A bare name such as `python3` was probed relative to the working
/// directory, but `Command` would search `PATH` for it instead.
pub(super) fn program_path(binary: &Path) -> PathBuf {
    if binary.is_relative() {
        Path::new(".").join(binary)
    } else {
        binary.to_path_buf()
    }
}

/// Anything buffered must reach the terminal before the image is replaced.
fn flush_diagnostics() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}
