// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Output selection for the SiPixel calibration single-muon AlCaReco stream.

use crate::errors::ParameterError;
use crate::pset::{Parameter, ParameterSet, Value};

pub const SELECTING_PATH: &str = "pathALCARECOSiPixelCalSingleMuon";

const KEEP_COMMANDS: [&str; 4] = [
    "keep *_ALCARECOSiPixelCalSingleMuon_*_*",
    "keep *_muons__*",
    "keep *_offlinePrimaryVertices_*_*",
    "keep *_*riggerResults_*_HLT",
];

/// Event selection and keep statements, without dropping anything else.
pub fn out_alcareco_sipixel_cal_single_muon_no_drop() -> ParameterSet {
    ParameterSet::new()
        .with(
            "SelectEvents",
            Parameter::untracked(
                ParameterSet::new()
                    .with("SelectEvents", Parameter::tracked(Value::vstring([SELECTING_PATH]))),
            ),
        )
        .with("outputCommands", Parameter::untracked(Value::vstring(KEEP_COMMANDS)))
}

/// The same selection with `drop *` first, so only the kept products are
/// written.
pub fn out_alcareco_sipixel_cal_single_muon() -> Result<ParameterSet, ParameterError> {
    let mut output = out_alcareco_sipixel_cal_single_muon_no_drop();
    output.insert_into_list("outputCommands", 0, "drop *")?;
    Ok(output)
}
