//! Launch descriptors: a resolved binary plus its argument vector.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::kind::ShellKind;

/// Upper bound on `argv` entries, including the terminating slot.
pub const MAX_SHELL_ARGS: usize = 8;

/// A resolved shell invocation, ready for process-image replacement.
///
/// A descriptor is either fully valid (a binary and a launchable kind) or
/// [`missing`](Self::missing); the constructors make a half-filled one
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDescriptor {
    binary: Option<PathBuf>,
    /// Arguments after `argv[0]`, which is filled in with the binary at launch.
    args: Vec<String>,
    kind: ShellKind,
}

impl LaunchDescriptor {
    /// A descriptor for a shell that could not be found.
    pub fn missing() -> Self {
        Self {
            binary: None,
            args: Vec::new(),
            kind: ShellKind::Missing,
        }
    }

    /// A descriptor for `binary` launched with `args` after `argv[0]`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`ShellKind::Missing`] or if the argument vector
    /// would not fit in [`MAX_SHELL_ARGS`]. Both are programming errors.
    pub fn new<I, S>(kind: ShellKind, binary: PathBuf, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        assert!(!kind.is_missing(), "a found shell cannot be Missing");
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        assert!(
            args.len() + 1 < MAX_SHELL_ARGS,
            "too many shell arguments ({} >= {})",
            args.len() + 1,
            MAX_SHELL_ARGS
        );
        Self {
            binary: Some(binary),
            args,
            kind,
        }
    }

    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    /// The binary path, `None` exactly when the shell is missing.
    pub fn binary_path(&self) -> Option<&Path> {
        self.binary.as_deref()
    }

    pub fn is_missing(&self) -> bool {
        self.kind.is_missing()
    }

    /// Number of valid `argv` entries, counting `argv[0]`.
    pub fn argc(&self) -> usize {
        self.args.len() + 1
    }

    /// Arguments after `argv[0]`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full argument vector with `argv[0]` set to the binary path.
    ///
    /// Empty for a missing shell.
    pub fn argv(&self) -> Vec<OsString> {
        let Some(binary) = &self.binary else {
            return Vec::new();
        };
        let mut argv = Vec::with_capacity(self.argc());
        argv.push(binary.as_os_str().to_os_string());
        argv.extend(self.args.iter().map(OsString::from));
        argv
    }
}
