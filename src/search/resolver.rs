//! Search-path resolution.
//!
//! A lookup first tries the platform's preferred package-manager directory
//! (Homebrew on macOS) and then the directories listed in `PATH`. Callers
//! that want the stable system shell can opt out of the preferred directory
//! with [`PathSearchSettings::avoid_preferred_dir`].

use std::env::VarError;
use std::path::PathBuf;

use super::join::join_path;
use super::probe::{is_executable, search_dirs};

/// Search path used when `PATH` is unset.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/sbin:/usr/bin:/usr/sbin:/usr/local/sbin";

/// Separator between entries of the search path.
const PATH_SEPARATOR: char = ':';

/// Candidate Homebrew bin directories, Apple Silicon first.
///
/// Empty on platforms without a preferred package-manager directory.
pub const PREFERRED_BIN_DIRS: &[&str] = if cfg!(target_os = "macos") {
    &["/opt/homebrew/bin", "/usr/local/bin"]
} else {
    &[]
};

/// Binary whose presence marks a candidate as a real Homebrew directory.
pub const PREFERRED_BIN_MARKER: &str = "brew";

/// Settings for a single lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathSearchSettings {
    /// Skip the preferred package-manager directory and search only `PATH`.
    pub avoid_preferred_dir: bool,
}

impl PathSearchSettings {
    /// Settings that search `PATH` only.
    pub fn path_only() -> Self {
        Self {
            avoid_preferred_dir: true,
        }
    }
}

/// Split a search path into its directories.
///
/// Empty segments are preserved as empty strings; they are not treated as the
/// current directory.
pub fn split_search_path(search_path: &str) -> Vec<String> {
    search_path
        .split(PATH_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Resolves binary names against the preferred directory and the search path.
///
/// The environment is captured once at construction, so repeated lookups with
/// the same settings agree as long as the filesystem does not change.
#[derive(Debug, Clone)]
pub struct PathResolver {
    search_path: Option<String>,
    preferred_candidates: Vec<String>,
}

impl PathResolver {
    /// Create a resolver from the process environment.
    pub fn from_env() -> Self {
        Self::with_env(|key: &str| std::env::var(key))
    }

    /// Create a resolver with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    /// A non-Unicode `PATH` is treated as unset.
    pub fn with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Self {
            search_path: env_fn("PATH").ok(),
            preferred_candidates: PREFERRED_BIN_DIRS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replace the candidate list for the preferred directory.
    pub fn with_preferred_candidates(mut self, candidates: Vec<String>) -> Self {
        self.preferred_candidates = candidates;
        self
    }

    /// The first preferred candidate directory that contains the marker binary.
    pub fn preferred_bin_dir(&self) -> Option<&str> {
        let found = search_dirs(&self.preferred_candidates, PREFERRED_BIN_MARKER)?;
        self.preferred_candidates
            .get(found.dir_index)
            .map(String::as_str)
    }

    /// The ordered directories searched after the preferred directory.
    pub fn search_dirs(&self) -> Vec<String> {
        split_search_path(self.search_path.as_deref().unwrap_or(DEFAULT_SEARCH_PATH))
    }

    /// Resolve `name` to an executable path, or `None` if nothing matches.
    pub fn resolve(&self, name: &str, settings: PathSearchSettings) -> Option<PathBuf> {
        if !settings.avoid_preferred_dir {
            if let Some(dir) = self.preferred_bin_dir() {
                let candidate = PathBuf::from(join_path(dir, name));
                if is_executable(&candidate) {
                    tracing::debug!("Using {} from preferred directory {}", name, dir);
                    return Some(candidate);
                }
                tracing::debug!("{} not in preferred directory {}", name, dir);
            }
        }

        let dirs = self.search_dirs();
        search_dirs(&dirs, name).map(|found| found.binary_path)
    }
}
