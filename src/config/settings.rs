// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{ALLOW_EXTERNAL_ENV, FRAGMENT_PATH_ENV};
use std::path::PathBuf;

/// Run-time settings of the builder, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directories searched for fragment files, in order.
    pub fragment_path: Vec<PathBuf>,
    /// Pass fragments that can't be resolved locally to the engine by name.
    pub allow_external: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fragment_path: Vec::new(),
            allow_external: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(path) = lookup(FRAGMENT_PATH_ENV) {
            settings.fragment_path = std::env::split_paths(&path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect();
        }
        if let Some(flag) = lookup(ALLOW_EXTERNAL_ENV) {
            settings.allow_external = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(settings_from(&[]), Settings::default());
        assert!(Settings::default().allow_external);
    }

    #[test]
    fn test_fragment_path_is_split() {
        let settings = settings_from(&[(FRAGMENT_PATH_ENV, "/opt/frags::/home/me/frags")]);
        assert_eq!(
            settings.fragment_path,
            vec![PathBuf::from("/opt/frags"), PathBuf::from("/home/me/frags")]
        );
    }

    #[test]
    fn test_external_fragments_can_be_disabled() {
        assert!(!settings_from(&[(ALLOW_EXTERNAL_ENV, "false")]).allow_external);
        assert!(!settings_from(&[(ALLOW_EXTERNAL_ENV, "0")]).allow_external);
        assert!(settings_from(&[(ALLOW_EXTERNAL_ENV, "yes")]).allow_external);
    }
}
