// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The process: everything one engine job runs.
//!
//! A [`ProcessBuilder`] collects modules, services, event-setup objects, the
//! source, sequences, paths and the schedule, optionally merged in from
//! fragments. [`ProcessBuilder::build`] applies the era and validates the
//! result, returning an immutable [`Process`].

mod builder;
mod definition;
mod module;
mod path;
mod validation;

pub use builder::ProcessBuilder;
pub use definition::Process;
pub use module::{Component, Module, ModuleKind};
pub use path::{MaxEvents, Path, Sequence};
