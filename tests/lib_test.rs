//! Integration tests for the public search and detection API.

use std::env::VarError;
use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wrap_shell::search::{
    is_executable, join_path, search_dirs, split_search_path, PathResolver, PathSearchSettings,
};
use wrap_shell::shell::{ShellDetector, ShellKind};

fn write_script(path: &Path, mode: u32) {
    fs::write(path, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }
    #[cfg(not(unix))]
    let _ = mode;
}

fn resolver(search_path: String, preferred: Vec<String>) -> PathResolver {
    PathResolver::with_env(move |key| {
        if key == "PATH" {
            Ok(search_path.clone())
        } else {
            Err(VarError::NotPresent)
        }
    })
    .with_preferred_candidates(preferred)
}

#[test]
fn join_handles_separators_and_absolute_names() {
    assert_eq!(join_path("/usr/bin", "zsh"), "/usr/bin/zsh");
    assert_eq!(join_path("/usr/bin/", "zsh"), "/usr/bin/zsh");
    assert_eq!(join_path("", "zsh"), "/zsh");
    assert_eq!(join_path("/usr/bin", "/opt/zsh"), "/opt/zsh");
}

#[test]
fn split_keeps_empty_segments() {
    assert_eq!(split_search_path("/a::/b"), vec!["/a", "", "/b"]);
}

#[test]
fn earlier_directory_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_script(&first.path().join("fish"), 0o755);
    write_script(&second.path().join("fish"), 0o755);
    let dirs = [
        "/nonexistent/wrap-shell-test".to_string(),
        first.path().to_string_lossy().to_string(),
        second.path().to_string_lossy().to_string(),
    ];

    let found = search_dirs(&dirs, "fish").unwrap();

    assert_eq!(found.dir_index, 1);
    assert_eq!(found.binary_path, first.path().join("fish"));
}

#[cfg(unix)]
#[test]
fn non_executable_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    write_script(&temp.path().join("zsh"), 0o644);

    assert!(!is_executable(&temp.path().join("zsh")));
    assert!(search_dirs(&[temp.path().to_string_lossy()], "zsh").is_none());
}

#[test]
fn preferred_directory_takes_priority() {
    let brew = TempDir::new().unwrap();
    let system = TempDir::new().unwrap();
    write_script(&brew.path().join("brew"), 0o755);
    write_script(&brew.path().join("fish"), 0o755);
    write_script(&system.path().join("fish"), 0o755);
    let resolver = resolver(
        system.path().to_string_lossy().to_string(),
        vec![brew.path().to_string_lossy().to_string()],
    );

    assert_eq!(
        resolver.resolve("fish", PathSearchSettings::default()),
        Some(brew.path().join("fish"))
    );
    assert_eq!(
        resolver.resolve("fish", PathSearchSettings::path_only()),
        Some(system.path().join("fish"))
    );
}

#[test]
fn preferred_directory_requires_marker() {
    let brew = TempDir::new().unwrap();
    let system = TempDir::new().unwrap();
    write_script(&brew.path().join("fish"), 0o755);
    write_script(&system.path().join("fish"), 0o755);
    let resolver = resolver(
        system.path().to_string_lossy().to_string(),
        vec![brew.path().to_string_lossy().to_string()],
    );

    assert_eq!(resolver.preferred_bin_dir(), None);
    assert_eq!(
        resolver.resolve("fish", PathSearchSettings::default()),
        Some(system.path().join("fish"))
    );
}

#[test]
fn detector_reports_sh_when_zsh_is_absent() {
    let temp = TempDir::new().unwrap();
    write_script(&temp.path().join("sh"), 0o755);
    let resolver = resolver(temp.path().to_string_lossy().to_string(), Vec::new());

    let shell = ShellDetector::new(&resolver)
        .detect(ShellKind::Zsh, None)
        .unwrap();

    assert_eq!(shell.kind(), ShellKind::Sh);
    assert_eq!(shell.binary_path(), Some(temp.path().join("sh").as_path()));
}
