// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Modifiers, modifier chains and eras.
//!
//! A [`Modifier`] is a named bundle of [`Modification`]s. Modifiers are
//! composed into a [`ModifierChain`]; a chain with a well-known name is an
//! [`Era`]. A process is built with one era and every modifier in it is
//! applied to the process, in chain order, before validation.

pub mod catalog;
mod chain;
mod edit;
mod modifier;

pub use chain::{ChainMember, Era, ModifierChain};
pub use edit::{Edit, Modification};
pub use modifier::{ModificationTarget, Modifier};
