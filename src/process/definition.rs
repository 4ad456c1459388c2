// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::modifiers::Era;
use crate::process::{Component, MaxEvents, Module, Path, Sequence};
use crate::pset::ParameterSet;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A finished job configuration, ready to be dumped for the engine.
///
/// Produced by [`ProcessBuilder::build`](crate::process::ProcessBuilder::build)
/// after the era has been applied and validation passed. Nothing in it can be
/// changed afterwards.
#[derive(Debug, Clone)]
pub struct Process {
    pub(crate) name: String,
    pub(crate) era: Option<Era>,
    pub(crate) fragments: Vec<String>,
    pub(crate) external_fragments: Vec<String>,
    pub(crate) provides: Vec<String>,
    pub(crate) source: Option<Component>,
    pub(crate) max_events: MaxEvents,
    pub(crate) services: IndexMap<String, Component>,
    pub(crate) es_sources: IndexMap<String, Component>,
    pub(crate) es_producers: IndexMap<String, Component>,
    pub(crate) modules: IndexMap<String, Module>,
    pub(crate) sequences: IndexMap<String, Sequence>,
    pub(crate) paths: IndexMap<String, Path>,
    pub(crate) schedule: Option<Vec<String>>,
}

impl Process {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn era(&self) -> Option<&Era> {
        self.era.as_ref()
    }

    /// True when the era the process was built with includes `modifier`.
    pub fn is_using_modifier(&self, modifier: &str) -> bool {
        self.era.as_ref().is_some_and(|era| era.contains(modifier))
    }

    /// Fragments merged into the process, in load order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Fragments the engine has to resolve itself.
    pub fn external_fragments(&self) -> &[String] {
        &self.external_fragments
    }

    /// Labels the engine supplies itself, such as sequences defined by
    /// external fragments.
    pub fn provides(&self) -> &[String] {
        &self.provides
    }

    pub fn source(&self) -> Option<&Component> {
        self.source.as_ref()
    }

    pub fn max_events(&self) -> MaxEvents {
        self.max_events
    }

    pub fn module(&self, label: &str) -> Option<&Module> {
        self.modules.get(label)
    }

    pub fn modules(&self) -> impl Iterator<Item = (&str, &Module)> {
        self.modules.iter().map(|(label, module)| (label.as_str(), module))
    }

    pub fn service(&self, label: &str) -> Option<&Component> {
        self.services.get(label)
    }

    pub fn es_source(&self, label: &str) -> Option<&Component> {
        self.es_sources.get(label)
    }

    pub fn es_producer(&self, label: &str) -> Option<&Component> {
        self.es_producers.get(label)
    }

    pub fn sequence(&self, label: &str) -> Option<&Sequence> {
        self.sequences.get(label)
    }

    pub fn path(&self, label: &str) -> Option<&Path> {
        self.paths.get(label)
    }

    pub fn schedule(&self) -> Option<&[String]> {
        self.schedule.as_deref()
    }

    /// Paths the engine will run: the schedule when one was given, otherwise
    /// every path in declaration order.
    pub fn scheduled_paths(&self) -> Vec<&str> {
        match &self.schedule {
            Some(schedule) => schedule.iter().map(String::as_str).collect(),
            None => self.paths.keys().map(String::as_str).collect(),
        }
    }

    /// Parameters of any labelled object, whatever its category.
    pub fn parameters(&self, label: &str) -> Option<&ParameterSet> {
        if label == "source" {
            return self.source.as_ref().map(|s| &s.parameters);
        }
        self.modules
            .get(label)
            .map(|m| &m.parameters)
            .or_else(|| self.services.get(label).map(|c| &c.parameters))
            .or_else(|| self.es_sources.get(label).map(|c| &c.parameters))
            .or_else(|| self.es_producers.get(label).map(|c| &c.parameters))
    }
}

impl Serialize for Process {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("process", &self.name)?;
        if let Some(era) = &self.era {
            map.serialize_entry("era", era.name())?;
            map.serialize_entry("modifiers", &era.modifier_names().collect::<Vec<_>>())?;
        }
        if !self.external_fragments.is_empty() {
            map.serialize_entry("external_fragments", &self.external_fragments)?;
        }
        if let Some(source) = &self.source {
            map.serialize_entry("source", source)?;
        }
        map.serialize_entry("maxEvents", &self.max_events)?;
        map.serialize_entry("services", &self.services)?;
        map.serialize_entry("es_sources", &self.es_sources)?;
        map.serialize_entry("es_producers", &self.es_producers)?;
        map.serialize_entry("modules", &self.modules)?;
        map.serialize_entry("sequences", &self.sequences)?;
        map.serialize_entry("paths", &self.paths)?;
        map.serialize_entry("schedule", &self.scheduled_paths())?;
        map.end()
    }
}
