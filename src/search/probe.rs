//! Executable probing and first-match directory search.
//!
//! [`search_dirs`] is the single search primitive: both the preferred
//! package-manager directory detection and the `PATH` search funnel through it.
//!
//! # Example
//!
//! ```no_run
//! use wrap_shell::search::search_dirs;
//!
//! let dirs = ["/usr/local/bin", "/usr/bin", "/bin"];
//! if let Some(found) = search_dirs(&dirs, "zsh") {
//!     println!("zsh lives in {} ({})", dirs[found.dir_index], found.binary_path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use super::join::join_path;

/// The first directory that contained an executable match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Index into the searched directory list.
    pub dir_index: usize,
    /// Joined path of the executable.
    pub binary_path: PathBuf,
}

/// Check that `path` exists and the current user may read and execute it.
///
/// Uses `access(2)` with `R_OK | X_OK`, so ownership and group membership are
/// honored rather than just the mode bits. Never fails: anything missing or
/// inaccessible is simply not executable.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::R_OK | AccessFlags::X_OK).is_ok()
}

/// On non-Unix platforms executability is determined by file extension, not
/// permission bits, so any existing file counts.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Search `dirs` in order for an executable called `name`.
///
/// Directories that do not exist are skipped silently. The first hit wins,
/// so the order of `dirs` is the priority order.
pub fn search_dirs<S: AsRef<str>>(dirs: &[S], name: &str) -> Option<SearchMatch> {
    for (dir_index, dir) in dirs.iter().enumerate() {
        let dir = dir.as_ref();
        if !Path::new(dir).exists() {
            continue;
        }
        let candidate = PathBuf::from(join_path(dir, name));
        if is_executable(&candidate) {
            tracing::debug!("Found {} at {}", name, candidate.display());
            return Some(SearchMatch {
                dir_index,
                binary_path: candidate,
            });
        }
    }
    None
}
