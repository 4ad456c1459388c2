// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process validation.
//!
//! This module contains message types for logging events related to:
//! * Label uniqueness across object categories
//! * Path and sequence reference resolution
//! * Cyclic sequence detection
//! * Schedule consistency

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Process validation started.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use hepconf::observability::messages::validation::ValidationStarted;
///
/// let msg = ValidationStarted {
///     process: "demo",
///     label_count: 5,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ValidationStarted<'a> {
    pub process: &'a str,
    pub label_count: usize,
}

impl Display for ValidationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validating process '{}' with {} labelled objects",
            self.process, self.label_count
        )
    }
}

impl StructuredLog for ValidationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            process = self.process,
            label_count = self.label_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "validation",
            span_name = name,
            process = self.process,
            label_count = self.label_count,
        )
    }
}

/// Cyclic sequence detected while validating.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CyclicSequenceDetected<'a> {
    pub cycle: &'a [String],
}

impl Display for CyclicSequenceDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic sequence detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicSequenceDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// Process validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed<'a> {
    pub process: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validation of process '{}' failed with {} errors",
            self.process, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            process = self.process,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "validation",
            span_name = name,
            process = self.process,
            error_count = self.error_count,
        )
    }
}
