// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::FragmentLoader;
use crate::errors::{BuildError, OptionsError};
use crate::jobs::MESSAGE_LOGGER_FRAGMENT;
use crate::modifiers::catalog;
use crate::options::{Multiplicity, OptionParser, ParsedOptions, VarType};
use crate::presets::{HgcalGeometry, Preset};
use crate::process::{Component, Process, ProcessBuilder};
use crate::pset::{Parameter, ParameterSet, Value};
use crate::traits::Job;

/// Compares the wafer layout of a geometry against its reference file.
pub struct HgcalWaferValidation;

impl Job for HgcalWaferValidation {
    fn name(&self) -> &'static str {
        "hgcal_wafer_validation"
    }

    fn description(&self) -> &'static str {
        "HGCal wafer layout validation for geometry=D88|D92|D93"
    }

    fn options(&self) -> Result<OptionParser, OptionsError> {
        let mut parser = OptionParser::standard();
        parser.set_default("maxEvents", 1i64)?;
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

        let message_logger = Component::new("MessageLogger")
            .with("destinations", Parameter::untracked(Value::vstring(["cout"])))
            .with(
                "cout",
                Parameter::untracked(
                    ParameterSet::new().with("threshold", Parameter::untracked("INFO")),
                ),
            );

        let mut process = ProcessBuilder::new("TEST");
        process
            .era(catalog::era("Phase2C11M9")?)
            .load(loader, &geometry.geometry_fragment())?
            .load(loader, "Validation.HGCalValidation.hgcalWaferValidation_cfi")?
            .modify("hgcalWaferValidation", |validation| {
                validation.set(
                    "GeometryFileName",
                    Value::file_in_path(geometry.wafer_geometry_file()),
                )
            })?
            .load(loader, MESSAGE_LOGGER_FRAGMENT)?
            .service("MessageLogger", message_logger)
            .source(Component::new("EmptySource"))
            .max_events(options.int("maxEvents")?)
            .path("p", ["hgcalWaferValidation"]);
        process.build()
    }
}
