// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builtin;
mod fragment;
mod loader;
mod settings;

pub mod consts;

pub use builtin::list_builtin_fragments;
pub use fragment::{ConditionalModification, Fragment, FragmentOrigin};
pub use loader::{load_file, FragmentLoader};
pub use settings::Settings;
