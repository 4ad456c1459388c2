// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from selecting a named preset out of a closed set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresetError {
    #[error("unknown option '{value}' for '{option}', expected one of: {}", .allowed.join(", "))]
    UnknownPreset {
        option: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}
