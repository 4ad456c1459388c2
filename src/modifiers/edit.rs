// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ParameterError;
use crate::pset::{Parameter, ParameterSet, Value};
use serde::{Deserialize, Serialize};

/// One change to a parameter set.
///
/// `Set` and `Insert` carry a [`Parameter`] so they can be written in fragment
/// files with an explicit type; only the value is used; the field keeps its
/// own tracking flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    Set { path: String, value: Parameter },
    Declare { path: String, parameter: Parameter },
    Insert {
        path: String,
        index: usize,
        value: Parameter,
    },
    Remove { path: String },
}

impl Edit {
    pub fn set(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Edit::Set {
            path: path.into(),
            value: Parameter::tracked(value),
        }
    }

    pub fn declare(path: impl Into<String>, parameter: Parameter) -> Self {
        Edit::Declare {
            path: path.into(),
            parameter,
        }
    }

    pub fn insert(path: impl Into<String>, index: usize, value: impl Into<Value>) -> Self {
        Edit::Insert {
            path: path.into(),
            index,
            value: Parameter::tracked(value),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Edit::Remove { path: path.into() }
    }

    pub fn apply(&self, pset: &mut ParameterSet) -> Result<(), ParameterError> {
        match self {
            Edit::Set { path, value } => pset.set(path, value.value.clone()),
            Edit::Declare { path, parameter } => pset.declare(path, parameter.clone()),
            Edit::Insert { path, index, value } => {
                pset.insert_into_list(path, *index, value.value.clone())
            }
            Edit::Remove { path } => pset.remove(path).map(|_| ()),
        }
    }
}

/// Ordered edits aimed at one labelled object of a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub target: String,
    pub edits: Vec<Edit>,
}

impl Modification {
    pub fn new(target: impl Into<String>, edits: impl IntoIterator<Item = Edit>) -> Self {
        Self {
            target: target.into(),
            edits: edits.into_iter().collect(),
        }
    }

    /// Apply every edit in order, stopping at the first failure.
    pub fn apply(&self, pset: &mut ParameterSet) -> Result<(), ParameterError> {
        self.edits.iter().try_for_each(|edit| edit.apply(pset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_apply_in_order() {
        let mut pset = ParameterSet::new()
            .with("verbosity", Parameter::untracked(0))
            .with("outputCommands", Parameter::untracked(Value::vstring(["keep *"])));
        let modification = Modification::new(
            "out",
            [
                Edit::set("verbosity", 1),
                Edit::set("verbosity", 2),
                Edit::insert("outputCommands", 0, "drop *"),
                Edit::declare("fastCloning", Parameter::untracked(false)),
            ],
        );
        modification.apply(&mut pset).unwrap();

        let verbosity = pset.get("verbosity").unwrap();
        assert_eq!(verbosity.value, Value::Int32(2));
        assert!(!verbosity.tracked);
        assert_eq!(
            pset.value("outputCommands").unwrap().as_strings().unwrap(),
            &["drop *".to_string(), "keep *".to_string()]
        );
        assert!(pset.contains("fastCloning"));
    }

    #[test]
    fn test_edits_read_from_yaml() {
        let yaml = r#"
target: hgcalDigiStudyEE
edits:
  - { op: set, path: verbosity, value: { type: int32, value: 2 } }
  - { op: remove, path: ifLayer }
"#;
        let modification: Modification = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(modification.target, "hgcalDigiStudyEE");
        assert_eq!(modification.edits[0], Edit::set("verbosity", 2));
        assert_eq!(modification.edits[1], Edit::remove("ifLayer"));
    }
}
