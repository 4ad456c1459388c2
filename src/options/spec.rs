// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OptionsError;
use std::fmt;

/// Whether an option holds one value or an ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Singleton,
    List,
}

/// The type command-line text is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    String,
    Int,
    Bool,
    Float,
}

impl VarType {
    /// Convert one raw token value to this type.
    pub fn parse(self, name: &str, raw: &str) -> Result<OptionValue, OptionsError> {
        let invalid = || OptionsError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
            kind: self,
        };
        match self {
            VarType::String => Ok(OptionValue::String(raw.to_string())),
            VarType::Int => raw.trim().parse().map(OptionValue::Int).map_err(|_| invalid()),
            VarType::Float => raw
                .trim()
                .parse()
                .map(OptionValue::Float)
                .map_err(|_| invalid()),
            VarType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(OptionValue::Bool(true)),
                "false" | "0" => Ok(OptionValue::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VarType::String => "string",
            VarType::Int => "int",
            VarType::Bool => "bool",
            VarType::Float => "float",
        };
        f.write_str(name)
    }
}

/// A parsed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl OptionValue {
    pub fn var_type(&self) -> VarType {
        match self {
            OptionValue::String(_) => VarType::String,
            OptionValue::Int(_) => VarType::Int,
            OptionValue::Bool(_) => VarType::Bool,
            OptionValue::Float(_) => VarType::Float,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(v) => write!(f, "{}", v),
            OptionValue::Int(v) => write!(f, "{}", v),
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Default for an option: a single value, a list, or nothing (required).
#[derive(Debug, Clone, PartialEq)]
pub enum OptionDefault {
    Required,
    Value(OptionValue),
    List(Vec<OptionValue>),
}

impl From<OptionValue> for OptionDefault {
    fn from(v: OptionValue) -> Self {
        OptionDefault::Value(v)
    }
}

impl From<&str> for OptionDefault {
    fn from(v: &str) -> Self {
        OptionDefault::Value(v.into())
    }
}

impl From<i64> for OptionDefault {
    fn from(v: i64) -> Self {
        OptionDefault::Value(v.into())
    }
}

impl From<bool> for OptionDefault {
    fn from(v: bool) -> Self {
        OptionDefault::Value(v.into())
    }
}

/// One registered option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub name: String,
    pub multiplicity: Multiplicity,
    pub var_type: VarType,
    pub default: OptionDefault,
    pub help: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_accepts_common_spellings() {
        assert_eq!(VarType::Bool.parse("x", "True").unwrap(), OptionValue::Bool(true));
        assert_eq!(VarType::Bool.parse("x", "0").unwrap(), OptionValue::Bool(false));
        assert!(VarType::Bool.parse("x", "maybe").is_err());
    }

    #[test]
    fn test_int_conversion_failure_names_the_option() {
        let err = VarType::Int.parse("maxEvents", "ten").unwrap_err();
        assert_eq!(
            err,
            OptionsError::InvalidValue {
                name: "maxEvents".to_string(),
                value: "ten".to_string(),
                kind: VarType::Int,
            }
        );
    }
}
