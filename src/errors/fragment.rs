// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for locating and reading configuration fragments.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    /// No search directory, built-in, or external fallback could supply it.
    #[error("fragment '{name}' not found (searched: {})", .searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    NotFound { name: String, searched: Vec<PathBuf> },

    #[error("'{name}' is not a valid fragment name")]
    InvalidName { name: String },

    #[error("failed to read fragment file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fragment '{name}': {source}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
}
