// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Fragment, FragmentLoader};
use crate::errors::{BuildError, ParameterError};
use crate::modifiers::{catalog, Era, Modification, ModificationTarget};
use crate::observability::messages::builder::{
    FragmentLoaded, LabelReplaced, ProcessBuilt, UnknownModifierReferenced,
};
use crate::observability::messages::validation::{ValidationFailed, ValidationStarted};
use crate::observability::messages::StructuredLog;
use crate::process::validation::validate_process;
use crate::process::{Component, MaxEvents, Module, Path, Process, Sequence};
use crate::pset::{ParameterSet, Value};
use indexmap::IndexMap;

const GLOBAL_TAG_LABEL: &str = "GlobalTag";
const GLOBAL_TAG_PARAMETER: &str = "globaltag";

/// Assembles a [`Process`].
///
/// Objects are added by label. Adding an object under a label already used
/// in the same category replaces the earlier one in place. The same label in
/// two categories is reported when the process is built.
///
/// ```
/// use hepconf::process::{Component, Module, ProcessBuilder};
/// use hepconf::pset::Parameter;
///
/// let mut builder = ProcessBuilder::new("demo");
/// builder
///     .source(Component::new("EmptySource"))
///     .max_events(1)
///     .module("plotter", Module::analyzer("HGCGeomAnalyzer")
///         .with("fileName", Parameter::tracked("geom_output_v11.txt")))
///     .path("p", ["plotter"]);
/// let process = builder.build().unwrap();
/// assert_eq!(process.scheduled_paths(), ["p"]);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    name: String,
    era: Option<Era>,
    fragments: Vec<String>,
    external_fragments: Vec<String>,
    provides: Vec<String>,
    registered: Vec<(String, Modification)>,
    source: Option<Component>,
    max_events: MaxEvents,
    services: IndexMap<String, Component>,
    es_sources: IndexMap<String, Component>,
    es_producers: IndexMap<String, Component>,
    modules: IndexMap<String, Module>,
    sequences: IndexMap<String, Sequence>,
    paths: IndexMap<String, Path>,
    schedule: Option<Vec<String>>,
}

fn insert_labelled<T>(map: &mut IndexMap<String, T>, category: &str, label: String, item: T) {
    if map.contains_key(&label) {
        LabelReplaced {
            label: &label,
            category,
        }
        .log();
    }
    map.insert(label, item);
}

impl ProcessBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            era: None,
            fragments: Vec::new(),
            external_fragments: Vec::new(),
            provides: Vec::new(),
            registered: Vec::new(),
            source: None,
            max_events: MaxEvents::default(),
            services: IndexMap::new(),
            es_sources: IndexMap::new(),
            es_producers: IndexMap::new(),
            modules: IndexMap::new(),
            sequences: IndexMap::new(),
            paths: IndexMap::new(),
            schedule: None,
        }
    }

    pub fn era(&mut self, era: Era) -> &mut Self {
        self.era = Some(era);
        self
    }

    pub fn is_using_modifier(&self, modifier: &str) -> bool {
        self.era.as_ref().is_some_and(|era| era.contains(modifier))
    }

    /// Resolve `name` with `loader` and merge it. Loading a fragment twice is
    /// a no-op.
    pub fn load(&mut self, loader: &FragmentLoader, name: &str) -> Result<&mut Self, BuildError> {
        if self.fragments.iter().any(|loaded| loaded == name) {
            return Ok(self);
        }
        let fragment = loader.load(name)?;
        Ok(self.merge(fragment))
    }

    /// Merge an already resolved fragment.
    pub fn merge(&mut self, fragment: Fragment) -> &mut Self {
        FragmentLoaded {
            name: &fragment.name,
            origin: &fragment.origin.to_string(),
            object_count: fragment.object_count(),
        }
        .log();

        if fragment.is_external() {
            self.external_fragments.push(fragment.name.clone());
        }
        self.fragments.push(fragment.name);
        for (label, module) in fragment.modules {
            insert_labelled(&mut self.modules, "module", label, module);
        }
        for (label, service) in fragment.services {
            insert_labelled(&mut self.services, "service", label, service);
        }
        for (label, source) in fragment.es_sources {
            insert_labelled(&mut self.es_sources, "es_source", label, source);
        }
        for (label, producer) in fragment.es_producers {
            insert_labelled(&mut self.es_producers, "es_producer", label, producer);
        }
        for (label, sequence) in fragment.sequences {
            insert_labelled(&mut self.sequences, "sequence", label, sequence);
        }
        for label in fragment.provides {
            if !self.provides.contains(&label) {
                self.provides.push(label);
            }
        }
        self.registered
            .extend(fragment.modifications.into_iter().map(|m| m.into_parts()));
        self
    }

    pub fn module(&mut self, label: impl Into<String>, module: Module) -> &mut Self {
        insert_labelled(&mut self.modules, "module", label.into(), module);
        self
    }

    pub fn service(&mut self, label: impl Into<String>, service: Component) -> &mut Self {
        insert_labelled(&mut self.services, "service", label.into(), service);
        self
    }

    pub fn es_source(&mut self, label: impl Into<String>, source: Component) -> &mut Self {
        insert_labelled(&mut self.es_sources, "es_source", label.into(), source);
        self
    }

    pub fn es_producer(&mut self, label: impl Into<String>, producer: Component) -> &mut Self {
        insert_labelled(&mut self.es_producers, "es_producer", label.into(), producer);
        self
    }

    pub fn sequence<I, S>(&mut self, label: impl Into<String>, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_labelled(&mut self.sequences, "sequence", label.into(), Sequence::new(entries));
        self
    }

    pub fn path<I, S>(&mut self, label: impl Into<String>, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_labelled(&mut self.paths, "path", label.into(), Path::new(entries));
        self
    }

    pub fn end_path<I, S>(&mut self, label: impl Into<String>, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        insert_labelled(&mut self.paths, "path", label.into(), Path::end(entries));
        self
    }

    /// Restrict and order the paths the engine runs.
    pub fn schedule<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schedule = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn source(&mut self, source: Component) -> &mut Self {
        self.source = Some(source);
        self
    }

    pub fn max_events(&mut self, input: i64) -> &mut Self {
        self.max_events = MaxEvents { input };
        self
    }

    /// Edit the parameters of the object labelled `label`, whatever its
    /// category. `"source"` addresses the event source.
    pub fn modify<F>(&mut self, label: &str, edit: F) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(&mut ParameterSet) -> Result<(), ParameterError>,
    {
        let parameters = self
            .parameters_mut(label)
            .ok_or_else(|| BuildError::UnknownLabel {
                label: label.to_string(),
            })?;
        edit(parameters).map_err(|source| BuildError::Edit {
            label: label.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// Set the conditions global tag. The conditions fragment has to be
    /// loaded first.
    pub fn global_tag(&mut self, tag: &str) -> Result<&mut Self, BuildError> {
        self.modify(GLOBAL_TAG_LABEL, |conditions| {
            conditions.set(GLOBAL_TAG_PARAMETER, Value::string(tag))
        })
    }

    fn report_unknown_modifiers(&self, registered: &[(String, Modification)]) {
        let mut reported: Vec<&str> = Vec::new();
        for (name, _) in registered {
            let known = self.is_using_modifier(name)
                || catalog::list_modifiers().contains(&name.as_str())
                || catalog::list_eras().contains(&name.as_str());
            if known || reported.contains(&name.as_str()) {
                continue;
            }
            reported.push(name);
            UnknownModifierReferenced {
                modifier: name,
                modification_count: registered.iter().filter(|(n, _)| n == name).count(),
            }
            .log();
        }
    }

    /// Apply the era, validate, and freeze the result.
    pub fn build(mut self) -> Result<Process, BuildError> {
        let registered = std::mem::take(&mut self.registered);
        self.report_unknown_modifiers(&registered);
        if let Some(era) = self.era.take() {
            era.apply(&mut self, &registered)?;
            self.era = Some(era);
        }

        let process = Process {
            name: self.name,
            era: self.era,
            fragments: self.fragments,
            external_fragments: self.external_fragments,
            provides: self.provides,
            source: self.source,
            max_events: self.max_events,
            services: self.services,
            es_sources: self.es_sources,
            es_producers: self.es_producers,
            modules: self.modules,
            sequences: self.sequences,
            paths: self.paths,
            schedule: self.schedule,
        };

        ValidationStarted {
            process: &process.name,
            label_count: process.modules.len()
                + process.services.len()
                + process.es_sources.len()
                + process.es_producers.len()
                + process.sequences.len()
                + process.paths.len(),
        }
        .log();
        if let Err(errors) = validate_process(&process) {
            ValidationFailed {
                process: &process.name,
                error_count: errors.len(),
            }
            .log();
            return Err(BuildError::Validation(errors));
        }

        ProcessBuilt {
            process: &process.name,
            era: process.era.as_ref().map(|era| era.name()).unwrap_or("none"),
            module_count: process.modules.len(),
            path_count: process.paths.len(),
        }
        .log();
        Ok(process)
    }
}

impl ModificationTarget for ProcessBuilder {
    fn parameters_mut(&mut self, label: &str) -> Option<&mut ParameterSet> {
        if label == "source" {
            return self.source.as_mut().map(|source| &mut source.parameters);
        }
        if let Some(module) = self.modules.get_mut(label) {
            return Some(&mut module.parameters);
        }
        self.services
            .get_mut(label)
            .or_else(|| self.es_sources.get_mut(label))
            .or_else(|| self.es_producers.get_mut(label))
            .map(|component| &mut component.parameters)
    }
}
