// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::presets::Preset;

/// HGCal geometry version for the geometry analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HgcGeometryVersion {
    V10,
    V11,
}

impl Preset for HgcGeometryVersion {
    const OPTION: &'static str = "geom";
    const ALL: &'static [Self] = &[HgcGeometryVersion::V10, HgcGeometryVersion::V11];

    fn key(&self) -> &'static str {
        match self {
            HgcGeometryVersion::V10 => "v10",
            HgcGeometryVersion::V11 => "v11",
        }
    }
}

impl HgcGeometryVersion {
    pub fn geometry_fragment(&self) -> &'static str {
        match self {
            HgcGeometryVersion::V10 => "Configuration.Geometry.GeometryExtended2026D41Reco_cff",
            HgcGeometryVersion::V11 => "Configuration.Geometry.GeometryExtended2026D46Reco_cff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PresetError;

    #[test]
    fn test_versions_select_geometry() {
        assert_eq!(
            HgcGeometryVersion::from_key("v10").unwrap().geometry_fragment(),
            "Configuration.Geometry.GeometryExtended2026D41Reco_cff"
        );
        assert_eq!(
            HgcGeometryVersion::from_key("v11").unwrap().geometry_fragment(),
            "Configuration.Geometry.GeometryExtended2026D46Reco_cff"
        );
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = HgcGeometryVersion::from_key("").unwrap_err();
        assert_eq!(
            err,
            PresetError::UnknownPreset {
                option: "geom",
                value: String::new(),
                allowed: vec!["v10", "v11"],
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown option '' for 'geom', expected one of: v10, v11"
        );
    }
}
