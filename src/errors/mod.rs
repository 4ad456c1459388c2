// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build;
mod config;
mod fragment;
mod options;
mod parameter;
mod preset;

pub use build::BuildError;
pub use config::ValidationError;
pub use fragment::FragmentError;
pub use options::OptionsError;
pub use parameter::ParameterError;
pub use preset::PresetError;
