// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for the diagnostic and
//! operational logging done while a job configuration is built. Message types
//! follow a struct-based pattern with a `Display` implementation so that:
//!
//! * Log text is not scattered as magic strings through the builder code
//! * Every message carries the same structured fields wherever it is emitted
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::builder` - fragment loading, era application and process assembly
//! * `messages::options` - command-line option parsing
//! * `messages::validation` - process validation results
//!
//! # Usage
//!
//! ```rust
//! use hepconf::observability::messages::builder::FragmentLoaded;
//! use hepconf::observability::messages::StructuredLog;
//!
//! let msg = FragmentLoaded {
//!     name: "Configuration.Geometry.GeometryExtended2026D88Reco_cff",
//!     origin: "external",
//!     object_count: 0,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

/// Install a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`
/// (default `info`). Stdout is kept free for configuration dumps.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
