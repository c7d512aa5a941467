//! Executable lookup across binary directories.
//!
//! - [`join`] - Directory/name joining with absolute-path override
//! - [`probe`] - Executability checks and first-match directory search
//! - [`resolver`] - `PATH` splitting and the preferred package-manager directory

pub mod join;
pub mod probe;
pub mod resolver;

pub use join::join_path;
pub use probe::{is_executable, search_dirs, SearchMatch};
pub use resolver::{
    split_search_path, PathResolver, PathSearchSettings, DEFAULT_SEARCH_PATH, PREFERRED_BIN_DIRS,
    PREFERRED_BIN_MARKER,
};
