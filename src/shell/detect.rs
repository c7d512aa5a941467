//! Shell detection.
//!
//! Maps a requested [`ShellKind`] to a [`LaunchDescriptor`]:
//!
//! - `zsh`/`sh` ("default"): `zsh` from `PATH`, else `sh`, never from the
//!   preferred package-manager directory
//! - `fish`: `fish` from the preferred directory or `PATH`
//! - `xonsh`: `python3 -m xonsh`, using an explicit interpreter or `python3`
//!   found like `fish`

use std::path::{Path, PathBuf};

use crate::error::{Result, WrapShellError};
use crate::search::{is_executable, PathResolver, PathSearchSettings};

use super::descriptor::LaunchDescriptor;
use super::kind::ShellKind;

/// Python interpreter looked up when xonsh is requested without `--python-bin`.
pub const DEFAULT_PYTHON: &str = "python3";

/// Detects shells using a [`PathResolver`].
#[derive(Debug, Clone, Copy)]
pub struct ShellDetector<'a> {
    resolver: &'a PathResolver,
}

impl<'a> ShellDetector<'a> {
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Detect the shell for `requested`.
    ///
    /// `python_bin` only matters for xonsh. A missing shell is reported through
    /// the returned descriptor; only a missing python interpreter is an error.
    pub fn detect(
        &self,
        requested: ShellKind,
        python_bin: Option<&Path>,
    ) -> Result<LaunchDescriptor> {
        match requested {
            ShellKind::Zsh | ShellKind::Sh => Ok(self.default_shell()),
            ShellKind::Fish => Ok(self.fish_shell()),
            ShellKind::Xonsh => {
                let python = match python_bin {
                    Some(path) => path.to_path_buf(),
                    None => self.default_python()?,
                };
                Ok(self.xonsh_shell(python))
            }
            ShellKind::Missing => Ok(LaunchDescriptor::missing()),
        }
    }

    /// `zsh`, falling back to `sh`, searching `PATH` only.
    ///
    /// Callers tell the two apart through [`LaunchDescriptor::kind`].
    pub fn default_shell(&self) -> LaunchDescriptor {
        let settings = PathSearchSettings::path_only();
        if let Some(zsh) = self.resolver.resolve("zsh", settings) {
            return LaunchDescriptor::new(ShellKind::Zsh, zsh, Vec::<String>::new());
        }
        if let Some(sh) = self.resolver.resolve("sh", settings) {
            tracing::debug!("zsh not found, using sh");
            return LaunchDescriptor::new(ShellKind::Sh, sh, Vec::<String>::new());
        }
        LaunchDescriptor::missing()
    }

    /// `fish` from the preferred directory or `PATH`.
    pub fn fish_shell(&self) -> LaunchDescriptor {
        match self
            .resolver
            .resolve("fish", PathSearchSettings::default())
        {
            Some(fish) => LaunchDescriptor::new(ShellKind::Fish, fish, Vec::<String>::new()),
            None => LaunchDescriptor::missing(),
        }
    }

    /// `<python> -m xonsh`, or missing if `python` is not executable.
    pub fn xonsh_shell(&self, python: PathBuf) -> LaunchDescriptor {
        if !is_executable(&python) {
            tracing::debug!("python interpreter {} is not executable", python.display());
            return LaunchDescriptor::missing();
        }
        LaunchDescriptor::new(ShellKind::Xonsh, python, ["-m", "xonsh"])
    }

    /// Locate `python3` for xonsh.
    pub fn default_python(&self) -> Result<PathBuf> {
        self.resolver
            .resolve(DEFAULT_PYTHON, PathSearchSettings::default())
            .ok_or(WrapShellError::InterpreterNotFound)
    }
}
