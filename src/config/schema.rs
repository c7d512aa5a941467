//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file:
//!
//! ```yaml
//! shell: fish
//! fallback_to_zsh: true
//! python_bin: /opt/python/bin/python3
//! verbose: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shell::ShellKind;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapShellConfig {
    /// Shell to launch when no preference flag is given
    pub shell: ShellPreference,

    /// Fall back to zsh after the preferred shell exits
    #[serde(skip_serializing_if = "is_false")]
    pub fallback_to_zsh: bool,

    /// Python interpreter used to run xonsh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_bin: Option<PathBuf>,

    /// Print verbose information
    #[serde(skip_serializing_if = "is_false")]
    pub verbose: bool,
}

/// Which shell the user prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellPreference {
    /// zsh, or sh when zsh is not installed
    #[default]
    Default,
    Xonsh,
    Fish,
}

impl ShellPreference {
    /// The shell kind requested from detection.
    pub fn kind(self) -> ShellKind {
        match self {
            ShellPreference::Default => ShellKind::Zsh,
            ShellPreference::Xonsh => ShellKind::Xonsh,
            ShellPreference::Fish => ShellKind::Fish,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_default_shell() {
        let config = WrapShellConfig::default();
        assert_eq!(config.shell, ShellPreference::Default);
        assert!(!config.fallback_to_zsh);
        assert!(config.python_bin.is_none());
    }

    #[test]
    fn preference_maps_to_kind() {
        assert_eq!(ShellPreference::Default.kind(), ShellKind::Zsh);
        assert_eq!(ShellPreference::Xonsh.kind(), ShellKind::Xonsh);
        assert_eq!(ShellPreference::Fish.kind(), ShellKind::Fish);
    }

    #[test]
    fn parses_full_config() {
        let yaml = "shell: xonsh\nfallback_to_zsh: true\npython_bin: /opt/py/bin/python3\nverbose: true\n";
        let config: WrapShellConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.shell, ShellPreference::Xonsh);
        assert!(config.fallback_to_zsh);
        assert_eq!(config.python_bin, Some(PathBuf::from("/opt/py/bin/python3")));
        assert!(config.verbose);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config: WrapShellConfig = serde_yaml::from_str("shell: fish\n").unwrap();
        assert_eq!(config.shell, ShellPreference::Fish);
        assert!(!config.fallback_to_zsh);
    }

    #[test]
    fn rejects_unknown_shell() {
        let result: Result<WrapShellConfig, _> = serde_yaml::from_str("shell: bash\n");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_defaults() {
        let yaml = serde_yaml::to_string(&WrapShellConfig::default()).unwrap();
        assert_eq!(yaml.trim(), "shell: default");
    }
}
