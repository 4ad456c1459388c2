// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed parameter values.
//!
//! A [`Value`] is the payload of a single parameter. Scalars, homogeneous lists
//! of scalars, file references and nested parameter sets are all values; the
//! [`ValueKind`] of a value decides what may be assigned to it later.

use crate::errors::ParameterError;
use crate::pset::ParameterSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a parameter.
///
/// Names follow the engine's own spelling (`int32`, `vstring`, `PSet`, ...)
/// so dumped configurations read the same as what the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "uint32")]
    UInt32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "uint64")]
    UInt64,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "FileInPath")]
    FileInPath,
    #[serde(rename = "vint32")]
    VInt32,
    #[serde(rename = "vuint32")]
    VUInt32,
    #[serde(rename = "vint64")]
    VInt64,
    #[serde(rename = "vdouble")]
    VDouble,
    #[serde(rename = "vstring")]
    VString,
    #[serde(rename = "PSet")]
    PSet,
    #[serde(rename = "VPSet")]
    VPSet,
}

impl ValueKind {
    /// Element kind for list kinds, `None` for everything else.
    pub fn element_kind(self) -> Option<ValueKind> {
        match self {
            ValueKind::VInt32 => Some(ValueKind::Int32),
            ValueKind::VUInt32 => Some(ValueKind::UInt32),
            ValueKind::VInt64 => Some(ValueKind::Int64),
            ValueKind::VDouble => Some(ValueKind::Double),
            ValueKind::VString => Some(ValueKind::String),
            ValueKind::VPSet => Some(ValueKind::PSet),
            _ => None,
        }
    }

    pub fn is_list(self) -> bool {
        self.element_kind().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int32 => "int32",
            ValueKind::UInt32 => "uint32",
            ValueKind::Int64 => "int64",
            ValueKind::UInt64 => "uint64",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::FileInPath => "FileInPath",
            ValueKind::VInt32 => "vint32",
            ValueKind::VUInt32 => "vuint32",
            ValueKind::VInt64 => "vint64",
            ValueKind::VDouble => "vdouble",
            ValueKind::VString => "vstring",
            ValueKind::PSet => "PSet",
            ValueKind::VPSet => "VPSet",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(String),
    /// A path relative to the engine's data search path; resolved by the engine.
    FileInPath(String),
    VInt32(Vec<i32>),
    VUInt32(Vec<u32>),
    VInt64(Vec<i64>),
    VDouble(Vec<f64>),
    VString(Vec<String>),
    PSet(ParameterSet),
    VPSet(Vec<ParameterSet>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn file_in_path(s: impl Into<String>) -> Self {
        Value::FileInPath(s.into())
    }

    pub fn vstring<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::VString(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::Int64(_) => ValueKind::Int64,
            Value::UInt64(_) => ValueKind::UInt64,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::FileInPath(_) => ValueKind::FileInPath,
            Value::VInt32(_) => ValueKind::VInt32,
            Value::VUInt32(_) => ValueKind::VUInt32,
            Value::VInt64(_) => ValueKind::VInt64,
            Value::VDouble(_) => ValueKind::VDouble,
            Value::VString(_) => ValueKind::VString,
            Value::PSet(_) => ValueKind::PSet,
            Value::VPSet(_) => ValueKind::VPSet,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::FileInPath(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(v) => Some(i64::from(*v)),
            Value::UInt32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_pset(&self) -> Option<&ParameterSet> {
        match self {
            Value::PSet(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_pset_mut(&mut self) -> Option<&mut ParameterSet> {
        match self {
            Value::PSet(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Value::VString(v) => Some(v),
            _ => None,
        }
    }

    /// Number of entries for list values.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Value::VInt32(v) => Some(v.len()),
            Value::VUInt32(v) => Some(v.len()),
            Value::VInt64(v) => Some(v.len()),
            Value::VDouble(v) => Some(v.len()),
            Value::VString(v) => Some(v.len()),
            Value::VPSet(v) => Some(v.len()),
            _ => None,
        }
    }

    /// Insert `item` at `index` of a list value.
    ///
    /// The caller is expected to have checked the index and the element kind;
    /// a mismatched item is reported as a type error against `name`.
    pub(crate) fn insert_item(
        &mut self,
        name: &str,
        index: usize,
        item: Value,
    ) -> Result<(), ParameterError> {
        let expected = self.kind().element_kind();
        match (self, item) {
            (Value::VInt32(v), Value::Int32(x)) => v.insert(index, x),
            (Value::VUInt32(v), Value::UInt32(x)) => v.insert(index, x),
            (Value::VInt64(v), Value::Int64(x)) => v.insert(index, x),
            (Value::VDouble(v), Value::Double(x)) => v.insert(index, x),
            (Value::VString(v), Value::String(x)) => v.insert(index, x),
            (Value::VPSet(v), Value::PSet(x)) => v.insert(index, x),
            (this, item) => {
                return Err(match expected {
                    Some(expected) => ParameterError::TypeMismatch {
                        name: name.to_string(),
                        expected,
                        found: item.kind(),
                    },
                    None => ParameterError::NotAList {
                        name: name.to_string(),
                        found: this.kind(),
                    },
                })
            }
        }
        Ok(())
    }

    /// Build a value of `kind` from a loosely typed JSON value, as read from
    /// a fragment file.
    pub(crate) fn from_json(
        kind: ValueKind,
        raw: serde_json::Value,
    ) -> Result<Value, serde_json::Error> {
        use serde_json::from_value;
        Ok(match kind {
            ValueKind::Bool => Value::Bool(from_value(raw)?),
            ValueKind::Int32 => Value::Int32(from_value(raw)?),
            ValueKind::UInt32 => Value::UInt32(from_value(raw)?),
            ValueKind::Int64 => Value::Int64(from_value(raw)?),
            ValueKind::UInt64 => Value::UInt64(from_value(raw)?),
            ValueKind::Double => Value::Double(from_value(raw)?),
            ValueKind::String => Value::String(from_value(raw)?),
            ValueKind::FileInPath => Value::FileInPath(from_value(raw)?),
            ValueKind::VInt32 => Value::VInt32(from_value(raw)?),
            ValueKind::VUInt32 => Value::VUInt32(from_value(raw)?),
            ValueKind::VInt64 => Value::VInt64(from_value(raw)?),
            ValueKind::VDouble => Value::VDouble(from_value(raw)?),
            ValueKind::VString => Value::VString(from_value(raw)?),
            ValueKind::PSet => Value::PSet(from_value(raw)?),
            ValueKind::VPSet => Value::VPSet(from_value(raw)?),
        })
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<ParameterSet> for Value {
    fn from(v: ParameterSet) -> Self {
        Value::PSet(v)
    }
}
