// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::pset::{Value, ValueKind};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A value together with its tracking flag.
///
/// Untracked parameters are ignored by the engine's provenance bookkeeping, so
/// changing them does not change the identity of the job's output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ParameterRepr")]
pub struct Parameter {
    pub value: Value,
    pub tracked: bool,
}

impl Parameter {
    pub fn tracked(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tracked: true,
        }
    }

    pub fn untracked(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tracked: false,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

impl From<Value> for Parameter {
    fn from(value: Value) -> Self {
        Parameter::tracked(value)
    }
}

/// On-disk shape of a parameter: `{ type: int32, value: 3, tracked: false }`.
#[derive(Deserialize)]
struct ParameterRepr {
    #[serde(rename = "type")]
    kind: ValueKind,
    value: serde_json::Value,
    #[serde(default = "default_tracked")]
    tracked: bool,
}

fn default_tracked() -> bool {
    true
}

impl TryFrom<ParameterRepr> for Parameter {
    type Error = serde_json::Error;

    fn try_from(repr: ParameterRepr) -> Result<Self, Self::Error> {
        Ok(Parameter {
            value: Value::from_json(repr.kind, repr.value)?,
            tracked: repr.tracked,
        })
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = if self.tracked { 2 } else { 3 };
        let mut state = serializer.serialize_struct("Parameter", field_count)?;
        state.serialize_field("type", &self.value.kind())?;
        state.serialize_field("value", &self.value)?;
        if !self.tracked {
            state.serialize_field("tracked", &false)?;
        }
        state.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(v) => v.serialize(serializer),
            Value::Int32(v) => v.serialize(serializer),
            Value::UInt32(v) => v.serialize(serializer),
            Value::Int64(v) => v.serialize(serializer),
            Value::UInt64(v) => v.serialize(serializer),
            Value::Double(v) => v.serialize(serializer),
            Value::String(v) | Value::FileInPath(v) => v.serialize(serializer),
            Value::VInt32(v) => v.serialize(serializer),
            Value::VUInt32(v) => v.serialize(serializer),
            Value::VInt64(v) => v.serialize(serializer),
            Value::VDouble(v) => v.serialize(serializer),
            Value::VString(v) => v.serialize(serializer),
            Value::PSet(v) => v.serialize(serializer),
            Value::VPSet(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_flag_round_trips_through_yaml() {
        let yaml = "type: vint32\nvalue: [1, 2]\ntracked: false\n";
        let p: Parameter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p, Parameter::untracked(Value::VInt32(vec![1, 2])));

        let dumped = serde_yaml::to_string(&p).unwrap();
        assert!(dumped.contains("tracked: false"));
    }

    #[test]
    fn test_tracked_is_the_default_and_is_not_dumped() {
        let p: Parameter = serde_yaml::from_str("type: string\nvalue: INFO\n").unwrap();
        assert!(p.tracked);
        assert!(!serde_yaml::to_string(&p).unwrap().contains("tracked"));
    }

    #[test]
    fn test_mismatched_value_is_rejected() {
        let result: Result<Parameter, _> = serde_yaml::from_str("type: bool\nvalue: yes please\n");
        assert!(result.is_err());
    }
}
