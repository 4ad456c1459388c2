// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building or editing parameter sets.

use crate::pset::ValueKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The field was never declared.
    #[error("no such attribute '{name}'")]
    NoSuchAttribute { name: String },

    /// Assignment of a value whose kind differs from the declared one.
    #[error("type error: '{name}' is declared as {expected} but was given {found}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("attribute '{name}' is already declared")]
    AlreadyDeclared { name: String },

    #[error("'{name}' is {found}, not a list")]
    NotAList { name: String, found: ValueKind },

    #[error("'{name}' is {found}, not a nested parameter set")]
    NotAParameterSet { name: String, found: ValueKind },

    #[error("index {index} is out of range for '{name}' with {len} entries")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },
}
