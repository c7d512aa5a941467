//! Path joining.

const SEPARATOR: char = '/';

/// Join a directory and a file name with exactly one `/` between them.
///
/// If `name` is absolute it is returned unchanged and `base` is ignored.
/// An empty `base` still gets a separator, so `join_path("", "zsh")` is `/zsh`.
///
/// This works on strings rather than [`std::path::Path`] because `Path::join`
/// treats an empty base as the current directory and normalizes away doubled
/// separators when comparing.
pub fn join_path(base: &str, name: &str) -> String {
    if name.starts_with(SEPARATOR) {
        return name.to_string();
    }

    let needs_separator = !base.ends_with(SEPARATOR);
    let mut joined = String::with_capacity(base.len() + name.len() + 1);
    joined.push_str(base);
    if needs_separator {
        joined.push(SEPARATOR);
    }
    joined.push_str(name);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_separator() {
        assert_eq!(join_path("/usr/bin", "zsh"), "/usr/bin/zsh");
    }

    #[test]
    fn trailing_separator_is_not_doubled() {
        assert_eq!(join_path("/usr/bin/", "zsh"), "/usr/bin/zsh");
    }

    #[test]
    fn absolute_name_ignores_base() {
        assert_eq!(join_path("anything", "/abs/path"), "/abs/path");
        assert_eq!(join_path("", "/abs/path"), "/abs/path");
    }

    #[test]
    fn empty_base_gets_separator() {
        assert_eq!(join_path("", "zsh"), "/zsh");
    }

    #[test]
    fn relative_base_is_kept() {
        assert_eq!(join_path("bin", "fish"), "bin/fish");
    }

    #[test]
    fn nested_name_is_appended() {
        assert_eq!(join_path("/opt", "homebrew/bin/brew"), "/opt/homebrew/bin/brew");
    }
}
