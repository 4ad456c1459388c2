// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::modifiers::{Edit, Modification};
use crate::process::{Component, Module, Sequence};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Where a fragment definition came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FragmentOrigin {
    File(PathBuf),
    #[default]
    BuiltIn,
    /// Not resolved here; the engine loads it by name.
    External,
}

impl fmt::Display for FragmentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentOrigin::File(path) => write!(f, "{}", path.display()),
            FragmentOrigin::BuiltIn => write!(f, "built-in"),
            FragmentOrigin::External => write!(f, "external"),
        }
    }
}

/// Edits a fragment registers against a modifier. They are applied only when
/// that modifier is part of the process era.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalModification {
    pub modifier: String,
    pub target: String,
    pub edits: Vec<Edit>,
}

impl ConditionalModification {
    pub fn into_parts(self) -> (String, Modification) {
        (self.modifier, Modification::new(self.target, self.edits))
    }
}

/// A named, reusable bundle of configuration objects.
///
/// # Example YAML
///
/// ```yaml
/// modules:
///   hgcalWaferValidation:
///     kind: analyzer
///     type: HGCalWaferValidation
///     parameters:
///       GeometryFileName: { type: FileInPath, value: geom.txt }
/// provides: [RawToDigi]
/// modifications:
///   - modifier: phase2_hgcalV12
///     target: hgcalWaferValidation
///     edits:
///       - { op: set, path: GeometryFileName, value: { type: FileInPath, value: v12.txt } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fragment {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub origin: FragmentOrigin,
    #[serde(default)]
    pub modules: IndexMap<String, Module>,
    #[serde(default)]
    pub services: IndexMap<String, Component>,
    #[serde(default)]
    pub es_sources: IndexMap<String, Component>,
    #[serde(default)]
    pub es_producers: IndexMap<String, Component>,
    #[serde(default)]
    pub sequences: IndexMap<String, Sequence>,
    /// Labels defined by the engine when it loads this fragment.
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(default)]
    pub modifications: Vec<ConditionalModification>,
}

impl Fragment {
    /// A fragment whose content only the engine knows.
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: FragmentOrigin::External,
            ..Self::default()
        }
    }

    pub fn is_external(&self) -> bool {
        self.origin == FragmentOrigin::External
    }

    /// Number of labelled objects the fragment defines.
    pub fn object_count(&self) -> usize {
        self.modules.len()
            + self.services.len()
            + self.es_sources.len()
            + self.es_producers.len()
            + self.sequences.len()
    }
}
