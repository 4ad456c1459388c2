// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered, typed parameter sets.
//!
//! A [`ParameterSet`] keeps its fields in declaration order. Fields are
//! declared once; after that they can only be reassigned with a value of the
//! same [`ValueKind`]. Nested sets are addressed with dotted paths such as
//! `cout.threshold`.
//!
//! # Example
//! ```
//! use hepconf::pset::{Parameter, ParameterSet, Value};
//!
//! let base = ParameterSet::new()
//!     .with("fileName", Parameter::tracked("hgcDigi.root"))
//!     .with("closeFileFast", Parameter::untracked(true));
//!
//! let derived = base.clone_with([("fileName", Value::string("other.root"))]).unwrap();
//! assert_eq!(derived.value("fileName").unwrap().as_str(), Some("other.root"));
//! assert_eq!(base.value("fileName").unwrap().as_str(), Some("hgcDigi.root"));
//! ```

use crate::errors::ParameterError;
use crate::pset::{Parameter, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    fields: IndexMap<String, Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style declaration used when writing a set out literally.
    ///
    /// A repeated name replaces the earlier entry in place, the way a keyword
    /// argument list would.
    pub fn with(mut self, name: impl Into<String>, parameter: impl Into<Parameter>) -> Self {
        self.fields.insert(name.into(), parameter.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Top-level field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn get(&self, path: &str) -> Result<&Parameter, ParameterError> {
        let (parent, leaf) = self.parent(path)?;
        parent
            .fields
            .get(leaf)
            .ok_or_else(|| ParameterError::NoSuchAttribute {
                name: path.to_string(),
            })
    }

    pub fn value(&self, path: &str) -> Result<&Value, ParameterError> {
        self.get(path).map(|p| &p.value)
    }

    /// Declare a new field. The parent of a dotted path must already exist.
    pub fn declare(
        &mut self,
        path: &str,
        parameter: impl Into<Parameter>,
    ) -> Result<(), ParameterError> {
        let (parent, leaf) = self.parent_mut(path)?;
        if parent.fields.contains_key(leaf) {
            return Err(ParameterError::AlreadyDeclared {
                name: path.to_string(),
            });
        }
        parent.fields.insert(leaf.to_string(), parameter.into());
        Ok(())
    }

    /// Assign a declared field. The tracking flag of the field is kept.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), ParameterError> {
        let value = value.into();
        let field = self.get_mut(path)?;
        if field.kind() != value.kind() {
            return Err(ParameterError::TypeMismatch {
                name: path.to_string(),
                expected: field.kind(),
                found: value.kind(),
            });
        }
        field.value = value;
        Ok(())
    }

    pub fn remove(&mut self, path: &str) -> Result<Parameter, ParameterError> {
        let (parent, leaf) = self.parent_mut(path)?;
        parent
            .fields
            .shift_remove(leaf)
            .ok_or_else(|| ParameterError::NoSuchAttribute {
                name: path.to_string(),
            })
    }

    /// Copy this set and apply `overrides` to the copy.
    ///
    /// Overrides follow [`ParameterSet::set`]: they must name declared fields
    /// and keep their kind. `self` is left untouched.
    pub fn clone_with<I, S>(&self, overrides: I) -> Result<ParameterSet, ParameterError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut copy = self.clone();
        for (path, value) in overrides {
            copy.set(path.as_ref(), value)?;
        }
        Ok(copy)
    }

    /// Insert one element at `index` of a list field; `index == len` appends.
    pub fn insert_into_list(
        &mut self,
        path: &str,
        index: usize,
        item: impl Into<Value>,
    ) -> Result<(), ParameterError> {
        let field = self.get_mut(path)?;
        let len = field.value.list_len().ok_or_else(|| ParameterError::NotAList {
            name: path.to_string(),
            found: field.kind(),
        })?;
        if index > len {
            return Err(ParameterError::IndexOutOfRange {
                name: path.to_string(),
                index,
                len,
            });
        }
        field.value.insert_item(path, index, item.into())
    }

    pub fn push_to_list(&mut self, path: &str, item: impl Into<Value>) -> Result<(), ParameterError> {
        let current = self.value(path)?;
        let len = current.list_len().ok_or_else(|| ParameterError::NotAList {
            name: path.to_string(),
            found: current.kind(),
        })?;
        self.insert_into_list(path, len, item)
    }

    /// Merge the top-level fields of `other` into this set, in `other`'s order.
    pub fn extend_from(&mut self, other: &ParameterSet) -> Result<(), ParameterError> {
        if let Some(name) = other.names().find(|name| self.fields.contains_key(*name)) {
            return Err(ParameterError::AlreadyDeclared {
                name: name.to_string(),
            });
        }
        for (name, parameter) in other.iter() {
            self.fields.insert(name.to_string(), parameter.clone());
        }
        Ok(())
    }

    fn get_mut(&mut self, path: &str) -> Result<&mut Parameter, ParameterError> {
        let (parent, leaf) = self.parent_mut(path)?;
        parent
            .fields
            .get_mut(leaf)
            .ok_or_else(|| ParameterError::NoSuchAttribute {
                name: path.to_string(),
            })
    }

    fn parent<'a>(&self, path: &'a str) -> Result<(&ParameterSet, &'a str), ParameterError> {
        let Some((prefix, leaf)) = path.rsplit_once('.') else {
            return Ok((self, path));
        };
        let mut current = self;
        let mut walked = 0;
        for segment in prefix.split('.') {
            walked += segment.len() + 1;
            let field = current
                .fields
                .get(segment)
                .ok_or_else(|| ParameterError::NoSuchAttribute {
                    name: path[..walked - 1].to_string(),
                })?;
            current = field
                .value
                .as_pset()
                .ok_or_else(|| ParameterError::NotAParameterSet {
                    name: path[..walked - 1].to_string(),
                    found: field.kind(),
                })?;
        }
        Ok((current, leaf))
    }

    fn parent_mut<'a>(
        &mut self,
        path: &'a str,
    ) -> Result<(&mut ParameterSet, &'a str), ParameterError> {
        let Some((prefix, leaf)) = path.rsplit_once('.') else {
            return Ok((self, path));
        };
        let mut current = self;
        let mut walked = 0;
        for segment in prefix.split('.') {
            walked += segment.len() + 1;
            let field = current
                .fields
                .get_mut(segment)
                .ok_or_else(|| ParameterError::NoSuchAttribute {
                    name: path[..walked - 1].to_string(),
                })?;
            let found = field.kind();
            current = match &mut field.value {
                Value::PSet(nested) => nested,
                _ => {
                    return Err(ParameterError::NotAParameterSet {
                        name: path[..walked - 1].to_string(),
                        found,
                    })
                }
            };
        }
        Ok((current, leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pset::ValueKind;

    fn message_logger() -> ParameterSet {
        ParameterSet::new()
            .with(
                "destinations",
                Parameter::untracked(Value::vstring(["cout"])),
            )
            .with(
                "cout",
                Parameter::untracked(
                    ParameterSet::new().with("threshold", Parameter::untracked("INFO")),
                ),
            )
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let pset = ParameterSet::new()
            .with("zeta", Parameter::tracked(1))
            .with("alpha", Parameter::tracked(2))
            .with("mu", Parameter::tracked(3));
        assert_eq!(pset.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_undeclared_field_is_no_such_attribute() {
        let pset = message_logger();
        assert_eq!(
            pset.get("verbosity").unwrap_err(),
            ParameterError::NoSuchAttribute {
                name: "verbosity".to_string()
            }
        );
        let mut pset = pset;
        assert!(matches!(
            pset.set("cout.limit", 0),
            Err(ParameterError::NoSuchAttribute { name }) if name == "cout.limit"
        ));
    }

    #[test]
    fn test_assigning_other_kind_is_type_error() {
        let mut pset = message_logger();
        let err = pset.set("cout.threshold", 3).unwrap_err();
        assert_eq!(
            err,
            ParameterError::TypeMismatch {
                name: "cout.threshold".to_string(),
                expected: ValueKind::String,
                found: ValueKind::Int32,
            }
        );
    }

    #[test]
    fn test_dotted_set_reaches_nested_sets_and_keeps_tracking() {
        let mut pset = message_logger();
        pset.set("cout.threshold", "WARNING").unwrap();
        let threshold = pset.get("cout.threshold").unwrap();
        assert_eq!(threshold.value.as_str(), Some("WARNING"));
        assert!(!threshold.tracked);
    }

    #[test]
    fn test_descending_through_a_scalar_fails() {
        let mut pset = message_logger();
        let err = pset.set("destinations.first", "x").unwrap_err();
        assert_eq!(
            err,
            ParameterError::NotAParameterSet {
                name: "destinations".to_string(),
                found: ValueKind::VString,
            }
        );
    }

    #[test]
    fn test_clone_with_copies_untouched_fields_and_leaves_source_alone() {
        let source = message_logger().with("enabled", Parameter::tracked(true));
        let clone = source
            .clone_with([("enabled", Value::Bool(false))])
            .unwrap();

        assert_eq!(source.value("enabled").unwrap(), &Value::Bool(true));
        assert_eq!(clone.value("enabled").unwrap(), &Value::Bool(false));
        for name in source.names().filter(|n| *n != "enabled") {
            assert_eq!(source.get(name).unwrap(), clone.get(name).unwrap());
        }
    }

    #[test]
    fn test_clone_is_independent_of_later_source_edits() {
        let mut source = message_logger();
        let clone = source.clone_with(Vec::<(&str, Value)>::new()).unwrap();
        source.set("cout.threshold", "ERROR").unwrap();
        assert_eq!(clone.value("cout.threshold").unwrap().as_str(), Some("INFO"));
    }

    #[test]
    fn test_clone_with_bad_override_fails() {
        let source = message_logger();
        assert!(source.clone_with([("nope", Value::Bool(true))]).is_err());
    }

    #[test]
    fn test_sentinel_at_front_keeps_remaining_order() {
        let commands = vec!["keep *_a_*_*", "keep *_b_*_*", "keep *_c_*_*"];
        let mut pset = ParameterSet::new().with(
            "outputCommands",
            Parameter::untracked(Value::vstring(commands.clone())),
        );
        pset.insert_into_list("outputCommands", 0, "drop *").unwrap();

        let stored = pset.value("outputCommands").unwrap().as_strings().unwrap();
        assert_eq!(stored[0], "drop *");
        assert_eq!(&stored[1..], commands.as_slice());
    }

    #[test]
    fn test_insert_past_end_is_rejected() {
        let mut pset = ParameterSet::new().with("gains", Parameter::tracked(Value::VInt32(vec![12])));
        assert_eq!(
            pset.insert_into_list("gains", 2, 6).unwrap_err(),
            ParameterError::IndexOutOfRange {
                name: "gains".to_string(),
                index: 2,
                len: 1
            }
        );
        pset.push_to_list("gains", 6).unwrap();
        assert_eq!(pset.value("gains").unwrap(), &Value::VInt32(vec![12, 6]));
    }

    #[test]
    fn test_insert_into_scalar_is_not_a_list() {
        let mut pset = message_logger();
        assert!(matches!(
            pset.insert_into_list("cout", 0, "x"),
            Err(ParameterError::NotAList { .. })
        ));
    }

    #[test]
    fn test_declare_twice_fails_and_remove_forgets() {
        let mut pset = ParameterSet::new();
        pset.declare("verbosity", Value::Int32(0)).unwrap();
        assert!(matches!(
            pset.declare("verbosity", Value::Int32(1)),
            Err(ParameterError::AlreadyDeclared { .. })
        ));
        pset.remove("verbosity").unwrap();
        assert!(pset.is_empty());
    }

    #[test]
    fn test_extend_from_rejects_conflicts() {
        let mut a = ParameterSet::new().with("fileName", Parameter::untracked("a.root"));
        let b = ParameterSet::new()
            .with("outputCommands", Parameter::untracked(Value::vstring(["drop *"])));
        a.extend_from(&b).unwrap();
        assert_eq!(a.names().collect::<Vec<_>>(), vec!["fileName", "outputCommands"]);
        assert!(a.extend_from(&b).is_err());
    }

    #[test]
    fn test_yaml_round_trip_preserves_order_and_types() {
        let yaml = r#"
onlineMode: { type: bool, value: false, tracked: false }
wavelengths: { type: vint32, value: [1, 2] }
cout:
  type: PSet
  value:
    threshold: { type: string, value: INFO }
"#;
        let pset: ParameterSet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(pset.names().collect::<Vec<_>>(), vec!["onlineMode", "wavelengths", "cout"]);
        assert_eq!(pset.value("cout.threshold").unwrap().as_str(), Some("INFO"));

        let again: ParameterSet =
            serde_yaml::from_str(&serde_yaml::to_string(&pset).unwrap()).unwrap();
        assert_eq!(again, pset);
    }
}
