//! Known shell kinds.

use std::fmt;

/// Shells wrap-shell knows how to find and launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    /// Marker for a shell that could not be found. Never a launch target.
    Missing,
    Xonsh,
    Fish,
    Zsh,
    Sh,
}

impl ShellKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShellKind; 5] = [
        ShellKind::Missing,
        ShellKind::Xonsh,
        ShellKind::Fish,
        ShellKind::Zsh,
        ShellKind::Sh,
    ];

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            ShellKind::Missing => "missing",
            ShellKind::Xonsh => "xonsh",
            ShellKind::Fish => "fish",
            ShellKind::Zsh => "zsh",
            ShellKind::Sh => "sh",
        }
    }

    pub fn is_missing(self) -> bool {
        self == ShellKind::Missing
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        assert_eq!(ShellKind::Xonsh.to_string(), "xonsh");
        assert_eq!(ShellKind::Fish.to_string(), "fish");
        assert_eq!(ShellKind::Zsh.to_string(), "zsh");
        assert_eq!(ShellKind::Sh.to_string(), "sh");
        assert_eq!(ShellKind::Missing.to_string(), "missing");
    }

    #[test]
    fn only_missing_is_missing() {
        for kind in ShellKind::ALL {
            assert_eq!(kind.is_missing(), kind == ShellKind::Missing);
        }
    }
}
