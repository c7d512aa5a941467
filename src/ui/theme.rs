//! Visual theme and styling.

use console::Style;

/// wrap-shell's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for error prefixes (red bold).
    pub error: Style,
    /// Style for notes (magenta).
    pub note: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            note: Style::new().magenta(),
        }
    }

    /// Theme for text written to stderr.
    pub fn for_stderr() -> Self {
        Self::new().for_stderr_styles()
    }

    fn for_stderr_styles(self) -> Self {
        Self {
            error: self.error.for_stderr(),
            note: self.note.for_stderr(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_output_keeps_text() {
        let theme = Theme::new();
        let plain = theme.note.force_styling(false).apply_to("NOTE:").to_string();
        assert_eq!(plain, "NOTE:");
    }

    #[test]
    fn forced_styles_add_escape_codes() {
        let theme = Theme::new();
        let styled = theme.error.force_styling(true).apply_to("ERROR:").to_string();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("ERROR:"));
    }
}
