// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::FragmentLoader;
use crate::errors::{BuildError, OptionsError};
use crate::jobs::{CONDITIONS_FRAGMENT, MESSAGE_LOGGER_FRAGMENT};
use crate::modifiers::catalog;
use crate::options::{Multiplicity, OptionParser, ParsedOptions, VarType};
use crate::presets::{HgcalGeometry, Preset};
use crate::process::{Component, Process, ProcessBuilder};
use crate::pset::{Parameter, Value};
use crate::traits::Job;

const DIGI_STUDY_MODULES: [&str; 3] = ["hgcalDigiStudyEE", "hgcalDigiStudyHEF", "hgcalDigiStudyHEB"];

/// Unpacks raw data and fills HGCal digi occupancy histograms.
pub struct HgcalDigiStudy;

impl Job for HgcalDigiStudy {
    fn name(&self) -> &'static str {
        "hgcal_digi_study"
    }

    fn description(&self) -> &'static str {
        "HGCal digi study for geometry=D88|D92|D93"
    }

    fn options(&self) -> Result<OptionParser, OptionsError> {
        let mut parser = OptionParser::standard();
        parser.register(
            HgcalGeometry::OPTION,
            HgcalGeometry::default().key(),
            Multiplicity::Singleton,
            VarType::String,
            "geometry of operations: D88, D92, D93",
        )?;
        Ok(parser)
    }

    fn configure(
        &self,
        options: &ParsedOptions,
        loader: &FragmentLoader,
    ) -> Result<Process, BuildError> {
        let geometry = HgcalGeometry::from_key(options.string(HgcalGeometry::OPTION)?)?;
        let default_input = geometry.digi_input_file();
        let mut input_files = options.strings("inputFiles")?;
        if input_files.is_empty() {
            input_files.push(&default_input);
        }

        let mut process = ProcessBuilder::new("PROD");
        process
            .era(catalog::era("Phase2C11M9")?)
            .load(loader, &geometry.reco_fragment())?
            .load(loader, "SimGeneral.HepPDTESSource.pythiapdt_cfi")?
            .load(loader, "Configuration.StandardSequences.MagneticField_cff")?
            .load(loader, MESSAGE_LOGGER_FRAGMENT)?
            .load(loader, "Configuration.StandardSequences.RawToDigi_cff")?
            .load(loader, "Validation.HGCalValidation.hgcDigiStudy_cfi")?
            .load(loader, CONDITIONS_FRAGMENT)?
            .global_tag("auto:phase2_realistic_T21")?
            .source(Component::new("PoolSource").with(
                "fileNames",
                Parameter::untracked(Value::vstring(input_files)),
            ))
            .max_events(options.int("maxEvents")?)
            .service(
                "TFileService",
                Component::new("TFileService")
                    .with("fileName", Parameter::tracked(geometry.digi_output_file()))
                    .with("closeFileFast", Parameter::untracked(true)),
            )
            .path("raw2digi_step", ["RawToDigi"])
            .path("analysis_step", DIGI_STUDY_MODULES);
        for label in DIGI_STUDY_MODULES {
            process.modify(label, |study| study.set("verbosity", 1))?;
        }
        process.schedule(["raw2digi_step", "analysis_step"]);
        process.build()
    }
}
