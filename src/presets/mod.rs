// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Closed sets of named presets selected by a command-line option.
//!
//! Each preset family is an enum whose variants carry everything that
//! depends on the selection (fragment names, file names). Selecting a key
//! outside the family fails immediately with [`PresetError::UnknownPreset`].

mod hgc_geometry_version;
mod hgcal_geometry;

pub use hgc_geometry_version::HgcGeometryVersion;
pub use hgcal_geometry::HgcalGeometry;

use crate::errors::PresetError;

pub trait Preset: Sized + Copy + 'static {
    /// Name of the option the preset is chosen with.
    const OPTION: &'static str;
    /// Every variant, in the order they are listed to users.
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;

    fn from_key(key: &str) -> Result<Self, PresetError> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.key() == key)
            .ok_or_else(|| PresetError::UnknownPreset {
                option: Self::OPTION,
                value: key.to_string(),
                allowed: Self::ALL.iter().map(|preset| preset.key()).collect(),
            })
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|preset| preset.key()).collect()
    }
}
