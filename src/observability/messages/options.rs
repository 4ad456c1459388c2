// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for command-line option parsing.

use crate::observability::messages::StructuredLog;
use crate::options::ParsedOptions;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Option parsing finished.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct OptionsParsed {
    pub registered: usize,
    pub given: usize,
}

impl Display for OptionsParsed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parsed command-line options: {} given, {} registered",
            self.given, self.registered
        )
    }
}

impl StructuredLog for OptionsParsed {
    fn log(&self) {
        tracing::debug!(
            registered = self.registered,
            given = self.given,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "options",
            span_name = name,
            registered = self.registered,
            given = self.given,
        )
    }
}

/// A `key=value` token named an option nobody registered, and the parser is
/// configured to ignore such keys.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use hepconf::observability::messages::options::UnknownOptionIgnored;
///
/// let msg = UnknownOptionIgnored { name: "geomtry" };
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownOptionIgnored<'a> {
    pub name: &'a str,
}

impl Display for UnknownOptionIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring unknown option '{}'", self.name)
    }
}

impl StructuredLog for UnknownOptionIgnored<'_> {
    fn log(&self) {
        tracing::warn!(option = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("options", span_name = name, option = self.name)
    }
}

/// The option values a job is configured with, one per line.
///
/// # Log Level
/// `info!` - Important operational event
pub struct OptionsSelected<'a> {
    pub job: &'a str,
    pub options: &'a ParsedOptions,
}

impl Display for OptionsSelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Options for job '{}':\n{}", self.job, self.options)
    }
}

impl StructuredLog for OptionsSelected<'_> {
    fn log(&self) {
        tracing::info!(job = self.job, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("options", span_name = name, job = self.job)
    }
}
