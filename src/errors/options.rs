// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for command-line option registration and parsing.

use crate::options::VarType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// A token that is not of the form `key=value`.
    #[error("parse error: '{token}' is not of the form key=value")]
    Parse { token: String },

    /// A required option received no value and has no default.
    #[error("missing argument: option '{name}' has no default and was not given")]
    MissingArgument { name: String },

    #[error("unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("invalid value '{value}' for option '{name}': expected {kind}")]
    InvalidValue {
        name: String,
        value: String,
        kind: VarType,
    },

    #[error("option '{name}' is already registered")]
    AlreadyRegistered { name: String },

    /// Typed access with the wrong type or multiplicity.
    #[error("option '{name}' is not a {requested}")]
    WrongType { name: String, requested: &'static str },
}
