// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Free-standing parameter sets that other configurations import.

pub mod alcareco;
pub mod ecal_dqm;

use crate::errors::ParameterError;
use crate::pset::ParameterSet;

const BLOCKS: &[&str] = &[
    "OutALCARECOSiPixelCalSingleMuon_noDrop",
    "OutALCARECOSiPixelCalSingleMuon",
    "ecalDQMCommonParams",
];

/// Look a block up by its configuration name.
pub fn lookup(name: &str) -> Option<Result<ParameterSet, ParameterError>> {
    match name {
        "OutALCARECOSiPixelCalSingleMuon_noDrop" => {
            Some(Ok(alcareco::out_alcareco_sipixel_cal_single_muon_no_drop()))
        }
        "OutALCARECOSiPixelCalSingleMuon" => Some(alcareco::out_alcareco_sipixel_cal_single_muon()),
        "ecalDQMCommonParams" => Some(Ok(ecal_dqm::ecal_dqm_parameters())),
        _ => None,
    }
}

pub fn list_blocks() -> &'static [&'static str] {
    BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_block_builds() {
        for name in list_blocks() {
            assert!(lookup(name).unwrap().is_ok(), "{name}");
        }
        assert!(lookup("nope").is_none());
    }
}
