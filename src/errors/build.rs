// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{FragmentError, OptionsError, ParameterError, PresetError, ValidationError};
use thiserror::Error;

/// Anything that can abort the construction of a job configuration.
///
/// All of these are reported at build time; nothing is deferred to the engine.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Fragment(#[from] FragmentError),

    /// Error from a parameter edit applied to a labelled object.
    #[error("while editing '{label}': {source}")]
    Edit {
        label: String,
        #[source]
        source: ParameterError,
    },

    #[error("'{label}' is not defined in this process")]
    UnknownLabel { label: String },

    #[error("unknown era or modifier '{name}'")]
    UnknownEra { name: String },

    #[error("unknown job '{name}'")]
    UnknownJob { name: String },

    #[error("Configuration validation failed:\n{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<ValidationError>),
}
