// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::FragmentLoader;
use crate::errors::{BuildError, OptionsError};
use crate::jobs::CONDITIONS_FRAGMENT;
use crate::modifiers::catalog;
use crate::options::{Multiplicity, OptionParser, ParsedOptions, VarType};
use crate::presets::{HgcGeometryVersion, Preset};
use crate::process::{Component, Module, Process, ProcessBuilder};
use crate::pset::Parameter;
use crate::traits::Job;

/// Dumps HGCal cell positions for one geometry version.
pub struct HgcGeomAnalyzer;

impl Job for HgcGeomAnalyzer {
    fn name(&self) -> &'static str {
        "hgc_geom_analyzer"
    }

    fn description(&self) -> &'static str {
        "HGCal geometry dump for geom=v10|v11"
    }

    fn options(&self) -> Result<OptionParser, OptionsError> {
        let mut parser = OptionParser::new();
        parser.register(
            HgcGeometryVersion::OPTION,
            "",
            Multiplicity::Singleton,
            VarType::String,
            "geometry version: v10, v11",
        )?;
        Ok(parser)
    }

    fn configure(
        &self,
        options: &ParsedOptions,
        loader: &FragmentLoader,
    ) -> Result<Process, BuildError> {
        let key = options.string(HgcGeometryVersion::OPTION)?;
        let version = HgcGeometryVersion::from_key(key)?;
        let file_stem = format!("geom_output_{}", version.key());

        let mut process = ProcessBuilder::new("demo");
        process
            .era(catalog::era("Phase2C8")?)
            .load(loader, CONDITIONS_FRAGMENT)?
            .load(loader, version.geometry_fragment())?
            .global_tag("auto:phase2_realistic")?
            .max_events(1)
            .source(Component::new("EmptySource"))
            .module(
                "plotter",
                Module::analyzer("HGCGeomAnalyzer")
                    .with("fileName", Parameter::tracked(format!("{file_stem}.txt"))),
            )
            .service(
                "TFileService",
                Component::new("TFileService")
                    .with("fileName", Parameter::tracked(format!("{file_stem}.root"))),
            )
            .path("p", ["plotter"]);
        process.build()
    }
}
