// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::presets::Preset;

/// Phase-2 detector geometry scenario used by the HGCal validation jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HgcalGeometry {
    D88,
    D92,
    #[default]
    D93,
}

impl Preset for HgcalGeometry {
    const OPTION: &'static str = "geometry";
    const ALL: &'static [Self] = &[HgcalGeometry::D88, HgcalGeometry::D92, HgcalGeometry::D93];

    fn key(&self) -> &'static str {
        match self {
            HgcalGeometry::D88 => "D88",
            HgcalGeometry::D92 => "D92",
            HgcalGeometry::D93 => "D93",
        }
    }
}

impl HgcalGeometry {
    /// Geometry with reconstruction conditions, for jobs reading digis.
    pub fn reco_fragment(&self) -> String {
        format!("Configuration.Geometry.GeometryExtended2026{}Reco_cff", self.key())
    }

    /// Geometry description only.
    pub fn geometry_fragment(&self) -> String {
        format!("Configuration.Geometry.GeometryExtended2026{}_cff", self.key())
    }

    /// Simulated ttbar input for the digi study.
    pub fn digi_input_file(&self) -> String {
        format!("file:step2{}tt.root", self.key())
    }

    /// Histogram file written by the digi study.
    pub fn digi_output_file(&self) -> String {
        format!("hgcDigi{}tt.root", self.key())
    }

    /// Reference wafer layout checked by the wafer validation.
    pub fn wafer_geometry_file(&self) -> &'static str {
        match self {
            HgcalGeometry::D88 => "Validation/HGCalValidation/data/geomnew_corrected_360_V1.txt",
            HgcalGeometry::D92 | HgcalGeometry::D93 => {
                "Validation/HGCalValidation/data/geomnew_corrected_360_V2.txt"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d88_digi_files() {
        let geometry = HgcalGeometry::from_key("D88").unwrap();
        assert_eq!(geometry.digi_input_file(), "file:step2D88tt.root");
        assert_eq!(geometry.digi_output_file(), "hgcDigiD88tt.root");
        assert_eq!(
            geometry.reco_fragment(),
            "Configuration.Geometry.GeometryExtended2026D88Reco_cff"
        );
    }

    #[test]
    fn test_wafer_files_by_geometry() {
        assert!(HgcalGeometry::D88.wafer_geometry_file().ends_with("_V1.txt"));
        assert!(HgcalGeometry::D92.wafer_geometry_file().ends_with("_V2.txt"));
        assert!(HgcalGeometry::D93.wafer_geometry_file().ends_with("_V2.txt"));
        assert_eq!(
            HgcalGeometry::D92.geometry_fragment(),
            "Configuration.Geometry.GeometryExtended2026D92_cff"
        );
    }

    #[test]
    fn test_default_and_unknown() {
        assert_eq!(HgcalGeometry::default(), HgcalGeometry::D93);
        assert_eq!(HgcalGeometry::keys(), ["D88", "D92", "D93"]);
        assert!(HgcalGeometry::from_key("D99").is_err());
        assert!(HgcalGeometry::from_key("d88").is_err());
    }
}
