// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::OptionsError;
use crate::options::{OptionSpec, OptionValue};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum Setting {
    Single(OptionValue),
    List(Vec<OptionValue>),
}

/// Option values after parsing, readable by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOptions {
    entries: IndexMap<String, (OptionSpec, Setting)>,
}

impl ParsedOptions {
    pub(crate) fn insert_single(&mut self, spec: OptionSpec, value: OptionValue) {
        self.entries
            .insert(spec.name.clone(), (spec, Setting::Single(value)));
    }

    pub(crate) fn insert_list(&mut self, spec: OptionSpec, values: Vec<OptionValue>) {
        self.entries
            .insert(spec.name.clone(), (spec, Setting::List(values)));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Result<&OptionValue, OptionsError> {
        match self.setting(name)? {
            Setting::Single(value) => Ok(value),
            Setting::List(_) => Err(wrong_type(name, "singleton")),
        }
    }

    pub fn values(&self, name: &str) -> Result<&[OptionValue], OptionsError> {
        match self.setting(name)? {
            Setting::List(values) => Ok(values),
            Setting::Single(_) => Err(wrong_type(name, "list")),
        }
    }

    pub fn string(&self, name: &str) -> Result<&str, OptionsError> {
        match self.value(name)? {
            OptionValue::String(s) => Ok(s),
            _ => Err(wrong_type(name, "string")),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, OptionsError> {
        match self.value(name)? {
            OptionValue::Int(v) => Ok(*v),
            _ => Err(wrong_type(name, "int")),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, OptionsError> {
        match self.value(name)? {
            OptionValue::Bool(v) => Ok(*v),
            _ => Err(wrong_type(name, "bool")),
        }
    }

    pub fn float(&self, name: &str) -> Result<f64, OptionsError> {
        match self.value(name)? {
            OptionValue::Float(v) => Ok(*v),
            OptionValue::Int(v) => Ok(*v as f64),
            _ => Err(wrong_type(name, "float")),
        }
    }

    pub fn strings(&self, name: &str) -> Result<Vec<&str>, OptionsError> {
        self.values(name)?
            .iter()
            .map(|v| match v {
                OptionValue::String(s) => Ok(s.as_str()),
                _ => Err(wrong_type(name, "string list")),
            })
            .collect()
    }

    pub fn ints(&self, name: &str) -> Result<Vec<i64>, OptionsError> {
        self.values(name)?
            .iter()
            .map(|v| match v {
                OptionValue::Int(i) => Ok(*i),
                _ => Err(wrong_type(name, "int list")),
            })
            .collect()
    }

    fn setting(&self, name: &str) -> Result<&Setting, OptionsError> {
        self.entries
            .get(name)
            .map(|(_, setting)| setting)
            .ok_or_else(|| OptionsError::UnknownOption {
                name: name.to_string(),
            })
    }
}

fn wrong_type(name: &str, requested: &'static str) -> OptionsError {
    OptionsError::WrongType {
        name: name.to_string(),
        requested,
    }
}

impl fmt::Display for ParsedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, (spec, setting)) in &self.entries {
            match setting {
                Setting::Single(value) => write!(f, "{}: {}", name, value)?,
                Setting::List(values) => {
                    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                    write!(f, "{}: [{}]", name, rendered.join(", "))?
                }
            }
            if !spec.help.is_empty() {
                write!(f, "  - {}", spec.help)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::OptionsError;
    use crate::options::{Multiplicity, OptionParser, VarType};

    #[test]
    fn test_typed_getters_check_type_and_multiplicity() {
        let mut parser = OptionParser::standard();
        parser
            .register("geometry", "D93", Multiplicity::Singleton, VarType::String, "geometry of operations")
            .unwrap();
        let parsed = parser.parse_arguments(["geometry=D88"]).unwrap();

        assert_eq!(parsed.string("geometry").unwrap(), "D88");
        assert!(matches!(parsed.int("geometry"), Err(OptionsError::WrongType { .. })));
        assert!(matches!(parsed.strings("geometry"), Err(OptionsError::WrongType { .. })));
        assert!(matches!(parsed.string("inputFiles"), Err(OptionsError::WrongType { .. })));
        assert!(matches!(parsed.string("nope"), Err(OptionsError::UnknownOption { .. })));
        assert_eq!(parsed.float("maxEvents").unwrap(), -1.0);
    }

    #[test]
    fn test_display_lists_every_option_with_help() {
        let mut parser = OptionParser::new();
        parser
            .register("geometry", "D93", Multiplicity::Singleton, VarType::String, "geometry of operations: D88, D92, D93")
            .unwrap();
        let rendered = parser.parse_arguments(Vec::<&str>::new()).unwrap().to_string();
        assert_eq!(rendered, "geometry: D93  - geometry of operations: D88, D92, D93\n");
    }
}
