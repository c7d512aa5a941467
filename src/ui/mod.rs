//! Terminal diagnostics.
//!
//! Everything user-facing goes to stderr so stdout stays clean for
//! `--dry-run` plans and completion scripts.

pub mod theme;

pub use theme::Theme;

/// Print a fatal error line.
pub fn error(msg: &str) {
    let theme = Theme::for_stderr();
    eprintln!("{} {}", theme.error.apply_to("ERROR:"), msg);
}

/// Print a non-fatal notice.
pub fn note(msg: &str) {
    let theme = Theme::for_stderr();
    eprintln!("{} {}", theme.note.apply_to("NOTE:"), msg);
}

/// Whether stderr output may be styled.
///
/// False when stderr is not a terminal, when `NO_COLOR`/`CLICOLOR` say so, or
/// after [`disable_colors`].
pub fn colors_enabled() -> bool {
    console::colors_enabled_stderr()
}

/// Disable styling on stderr and stdout.
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
