// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it with structured fields at its fixed level.
//!
//! # Organization
//!
//! * `builder` - fragment loading, era application, process assembly
//! * `options` - command-line option parsing
//! * `validation` - process validation warnings and errors

use tracing::Span;

pub mod builder;
pub mod options;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
