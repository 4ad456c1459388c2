// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::pset::{Parameter, ParameterSet};
use serde::{Deserialize, Serialize};

/// What an event-processing module does with the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Producer,
    Filter,
    Analyzer,
    Output,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::Producer => "producer",
            ModuleKind::Filter => "filter",
            ModuleKind::Analyzer => "analyzer",
            ModuleKind::Output => "output",
        }
    }
}

/// An engine plugin placed on paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub kind: ModuleKind,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl Module {
    pub fn new(kind: ModuleKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            parameters: ParameterSet::new(),
        }
    }

    pub fn producer(type_name: impl Into<String>) -> Self {
        Self::new(ModuleKind::Producer, type_name)
    }

    pub fn filter(type_name: impl Into<String>) -> Self {
        Self::new(ModuleKind::Filter, type_name)
    }

    pub fn analyzer(type_name: impl Into<String>) -> Self {
        Self::new(ModuleKind::Analyzer, type_name)
    }

    pub fn output(type_name: impl Into<String>) -> Self {
        Self::new(ModuleKind::Output, type_name)
    }

    pub fn with(mut self, name: impl Into<String>, parameter: impl Into<Parameter>) -> Self {
        self.parameters = self.parameters.with(name, parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }
}

/// A plugin that is not placed on paths: services, event-setup sources and
/// producers, and the event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl Component {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            parameters: ParameterSet::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, parameter: impl Into<Parameter>) -> Self {
        self.parameters = self.parameters.with(name, parameter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pset::Value;

    #[test]
    fn test_module_yaml_uses_type_key() {
        let module = Module::analyzer("HGCGeomAnalyzer")
            .with("fileName", Parameter::tracked("geom_output_v11.txt"));
        let yaml = serde_yaml::to_string(&module).unwrap();
        assert!(yaml.contains("kind: analyzer"));
        assert!(yaml.contains("type: HGCGeomAnalyzer"));

        let back: Module = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, module);
    }

    #[test]
    fn test_component_parameters_default_to_empty() {
        let component: Component = serde_yaml::from_str("type: EmptySource\n").unwrap();
        assert_eq!(component.type_name, "EmptySource");
        assert!(component.parameters.is_empty());

        let service = Component::new("TFileService").with("fileName", Parameter::tracked("out.root"));
        assert_eq!(
            service.parameters.value("fileName").unwrap(),
            &Value::string("out.root")
        );
    }
}
