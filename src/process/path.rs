// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// A named, reusable ordered group of module or sequence labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    pub entries: Vec<String>,
}

impl Sequence {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered list of module or sequence labels the engine runs per event.
///
/// End paths hold output and bookkeeping modules and run after all other
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub entries: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub end_path: bool,
}

impl Path {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            end_path: false,
        }
    }

    pub fn end<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            end_path: true,
            ..Self::new(entries)
        }
    }
}

/// Event limit for the job; `-1` processes every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxEvents {
    pub input: i64,
}

impl Default for MaxEvents {
    fn default() -> Self {
        Self { input: -1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_flag_is_only_written_for_end_paths() {
        let yaml = serde_yaml::to_string(&Path::new(["a", "b"])).unwrap();
        assert!(!yaml.contains("end_path"));
        let yaml = serde_yaml::to_string(&Path::end(["out"])).unwrap();
        assert!(yaml.contains("end_path: true"));
    }

    #[test]
    fn test_max_events_defaults_to_all() {
        assert_eq!(MaxEvents::default().input, -1);
    }
}
