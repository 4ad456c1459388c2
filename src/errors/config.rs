// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors found while validating a process before it is handed to the engine
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The same label names objects of two different categories
    DuplicateLabel {
        /// The label in conflict
        label: String,
        /// Categories that claim it, in the order they were found
        categories: Vec<&'static str>,
    },
    /// A path or sequence refers to a label that is not defined
    UnresolvedReference {
        /// The path or sequence holding the reference
        owner: String,
        /// The label that couldn't be resolved
        missing: String,
    },
    /// Sequences include each other in a loop
    CyclicSequence {
        /// The sequence names forming the loop, first name repeated at the end
        cycle: Vec<String>,
    },
    /// The schedule names a path that was never defined
    UnknownScheduledPath {
        path: String,
    },
    /// The schedule lists the same path more than once
    DuplicateScheduledPath {
        path: String,
    },
    /// A path with no entries
    EmptyPath {
        path: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateLabel { label, categories } => {
                write!(
                    f,
                    "Label '{}' is used by more than one kind of object: {}",
                    label,
                    categories.join(", ")
                )
            }
            ValidationError::UnresolvedReference { owner, missing } => {
                write!(
                    f,
                    "'{}' refers to '{}' which does not exist",
                    owner, missing
                )
            }
            ValidationError::CyclicSequence { cycle } => {
                write!(f, "Cyclic sequence detected: {}", cycle.join(" -> "))
            }
            ValidationError::UnknownScheduledPath { path } => {
                write!(f, "Schedule names unknown path '{}'", path)
            }
            ValidationError::DuplicateScheduledPath { path } => {
                write!(f, "Schedule lists path '{}' more than once", path)
            }
            ValidationError::EmptyPath { path } => {
                write!(f, "Path '{}' has no entries", path)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
