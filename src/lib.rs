// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod blocks;     // free-standing parameter sets
pub mod config;     // fragments, loader, settings
pub mod errors;     // error handling
pub mod jobs;       // concrete job configurations
pub mod modifiers;  // modifiers, chains and eras
pub mod observability;
pub mod options;    // key=value command-line options
pub mod presets;    // option-selected presets
pub mod process;    // process builder and validation
pub mod pset;       // typed parameter sets
pub mod traits;     // unified abstractions
