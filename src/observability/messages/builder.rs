// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process assembly.
//!
//! This module contains message types for logging events related to:
//! * Fragment resolution and loading
//! * Era and modifier application
//! * Replacement of labelled objects
//! * Completion of a process build

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A fragment was resolved and merged into the process.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use hepconf::observability::messages::builder::FragmentLoaded;
///
/// let msg = FragmentLoaded {
///     name: "Validation.HGCalValidation.hgcDigiStudy_cfi",
///     origin: "built-in",
///     object_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FragmentLoaded<'a> {
    pub name: &'a str,
    pub origin: &'a str,
    pub object_count: usize,
}

impl Display for FragmentLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded fragment '{}' from {} ({} objects)",
            self.name, self.origin, self.object_count
        )
    }
}

impl StructuredLog for FragmentLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            fragment = self.name,
            origin = self.origin,
            object_count = self.object_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "fragment",
            span_name = name,
            fragment = self.name,
            origin = self.origin,
        )
    }
}

/// A modifier's edits were applied to the process.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ModifierApplied<'a> {
    pub modifier: &'a str,
    pub modification_count: usize,
}

impl Display for ModifierApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Applied modifier '{}' ({} modifications)",
            self.modifier, self.modification_count
        )
    }
}

impl StructuredLog for ModifierApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            modifier = self.modifier,
            modification_count = self.modification_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("modifier", span_name = name, modifier = self.modifier)
    }
}

/// A modification targets a label this process does not define.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ModificationSkipped<'a> {
    pub modifier: &'a str,
    pub target: &'a str,
}

impl Display for ModificationSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Modifier '{}' targets '{}' which is not in this process; skipping",
            self.modifier, self.target
        )
    }
}

impl StructuredLog for ModificationSkipped<'_> {
    fn log(&self) {
        tracing::debug!(modifier = self.modifier, target = self.target, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "modifier",
            span_name = name,
            modifier = self.modifier,
            target = self.target,
        )
    }
}

/// Modifications were registered against a name that is neither part of
/// the era nor a known modifier or era, so they can never apply.
///
/// # Log Level
/// `warn!` - Likely a misspelled modifier name
pub struct UnknownModifierReferenced<'a> {
    pub modifier: &'a str,
    pub modification_count: usize,
}

impl Display for UnknownModifierReferenced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} modifications registered against unknown modifier '{}' are ignored",
            self.modification_count, self.modifier
        )
    }
}

impl StructuredLog for UnknownModifierReferenced<'_> {
    fn log(&self) {
        tracing::warn!(
            modifier = self.modifier,
            modification_count = self.modification_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("modifier", span_name = name, modifier = self.modifier)
    }
}

/// A labelled object replaced an earlier one with the same label.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct LabelReplaced<'a> {
    pub label: &'a str,
    pub category: &'a str,
}

impl Display for LabelReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Replacing {} '{}'", self.category, self.label)
    }
}

impl StructuredLog for LabelReplaced<'_> {
    fn log(&self) {
        tracing::debug!(label = self.label, category = self.category, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("label", span_name = name, label = self.label)
    }
}

/// The process passed validation and is ready for the engine.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use hepconf::observability::messages::builder::ProcessBuilt;
///
/// let msg = ProcessBuilt {
///     process: "PROD",
///     era: "Phase2C11M9",
///     module_count: 4,
///     path_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessBuilt<'a> {
    pub process: &'a str,
    pub era: &'a str,
    pub module_count: usize,
    pub path_count: usize,
}

impl Display for ProcessBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built process '{}' (era {}): {} modules, {} paths",
            self.process, self.era, self.module_count, self.path_count
        )
    }
}

impl StructuredLog for ProcessBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            process = self.process,
            era = self.era,
            module_count = self.module_count,
            path_count = self.path_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process",
            span_name = name,
            process = self.process,
            era = self.era,
        )
    }
}
