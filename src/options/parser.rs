// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `key=value` command-line option parsing.
//!
//! Jobs register the options they understand, then hand the raw invocation
//! tokens to [`OptionParser::parse_arguments`]. Every token must be of the
//! form `key=value`; values are converted to the registered [`VarType`].
//!
//! # Example
//! ```
//! use hepconf::options::{Multiplicity, OptionParser, VarType};
//!
//! let mut parser = OptionParser::new();
//! parser
//!     .register("geom", "", Multiplicity::Singleton, VarType::String, "geometry version")
//!     .unwrap();
//!
//! let parsed = parser.parse_arguments(["geom=v11"]).unwrap();
//! assert_eq!(parsed.string("geom").unwrap(), "v11");
//! ```

use crate::errors::OptionsError;
use crate::observability::messages::options::{OptionsParsed, UnknownOptionIgnored};
use crate::observability::messages::StructuredLog;
use crate::options::{
    Multiplicity, OptionDefault, OptionSpec, OptionValue, ParsedOptions, VarType,
};
use indexmap::IndexMap;

/// What to do with a `key=value` token whose key was never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    #[default]
    Reject,
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct OptionParser {
    specs: IndexMap<String, OptionSpec>,
    unknown_keys: UnknownKeyPolicy,
}

impl OptionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser with the options most jobs share already registered:
    /// `maxEvents`, `inputFiles`, `secondaryInputFiles` and `outputFile`.
    pub fn standard() -> Self {
        let mut parser = Self::new();
        let standard = [
            OptionSpec {
                name: "maxEvents".to_string(),
                multiplicity: Multiplicity::Singleton,
                var_type: VarType::Int,
                default: OptionDefault::Value(OptionValue::Int(-1)),
                help: "Number of events to process (-1 for all)".to_string(),
            },
            OptionSpec {
                name: "inputFiles".to_string(),
                multiplicity: Multiplicity::List,
                var_type: VarType::String,
                default: OptionDefault::List(Vec::new()),
                help: "Files to process".to_string(),
            },
            OptionSpec {
                name: "secondaryInputFiles".to_string(),
                multiplicity: Multiplicity::List,
                var_type: VarType::String,
                default: OptionDefault::List(Vec::new()),
                help: "Second group of files to process (if needed)".to_string(),
            },
            OptionSpec {
                name: "outputFile".to_string(),
                multiplicity: Multiplicity::Singleton,
                var_type: VarType::String,
                default: OptionDefault::Value(OptionValue::String("output.root".to_string())),
                help: "Name of output file (if needed)".to_string(),
            },
        ];
        for spec in standard {
            parser.specs.insert(spec.name.clone(), spec);
        }
        parser
    }

    pub fn unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Register an option. The default must match `var_type`; use
    /// [`OptionDefault::Required`] for singletons that must be given.
    pub fn register(
        &mut self,
        name: &str,
        default: impl Into<OptionDefault>,
        multiplicity: Multiplicity,
        var_type: VarType,
        help: &str,
    ) -> Result<&mut Self, OptionsError> {
        if self.specs.contains_key(name) {
            return Err(OptionsError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        let default = normalize_default(name, default.into(), multiplicity, var_type)?;
        self.specs.insert(
            name.to_string(),
            OptionSpec {
                name: name.to_string(),
                multiplicity,
                var_type,
                default,
                help: help.to_string(),
            },
        );
        Ok(self)
    }

    /// Replace the default of an already registered option.
    pub fn set_default(
        &mut self,
        name: &str,
        default: impl Into<OptionDefault>,
    ) -> Result<&mut Self, OptionsError> {
        let spec = self
            .specs
            .get_mut(name)
            .ok_or_else(|| OptionsError::UnknownOption {
                name: name.to_string(),
            })?;
        spec.default = normalize_default(name, default.into(), spec.multiplicity, spec.var_type)?;
        Ok(self)
    }

    /// Parse `key=value` tokens.
    ///
    /// Singletons keep the last value given. Lists take comma-separated values
    /// and may be repeated; the first occurrence on the command line replaces
    /// the default, later ones append.
    pub fn parse_arguments<I, S>(&self, tokens: I) -> Result<ParsedOptions, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut given: IndexMap<String, Vec<OptionValue>> = IndexMap::new();

        for token in tokens {
            let token = token.as_ref();
            let (key, raw) = token
                .split_once('=')
                .map(|(k, v)| (k.trim(), v))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| OptionsError::Parse {
                    token: token.to_string(),
                })?;

            let Some(spec) = self.specs.get(key) else {
                match self.unknown_keys {
                    UnknownKeyPolicy::Reject => {
                        return Err(OptionsError::UnknownOption {
                            name: key.to_string(),
                        })
                    }
                    UnknownKeyPolicy::Ignore => {
                        UnknownOptionIgnored { name: key }.log();
                        continue;
                    }
                }
            };

            let values = given.entry(key.to_string()).or_default();
            match spec.multiplicity {
                Multiplicity::Singleton => {
                    values.clear();
                    values.push(spec.var_type.parse(key, raw)?);
                }
                Multiplicity::List => {
                    for item in raw.split(',').filter(|s| !s.trim().is_empty()) {
                        values.push(spec.var_type.parse(key, item.trim())?);
                    }
                }
            }
        }

        let given_count = given.len();
        let mut parsed = ParsedOptions::default();
        for spec in self.specs.values() {
            let from_command_line = given.shift_remove(&spec.name);
            match spec.multiplicity {
                Multiplicity::Singleton => {
                    let value = match (from_command_line.and_then(|mut v| v.pop()), &spec.default) {
                        (Some(value), _) => value,
                        (None, OptionDefault::Value(default)) => default.clone(),
                        (None, _) => {
                            return Err(OptionsError::MissingArgument {
                                name: spec.name.clone(),
                            })
                        }
                    };
                    parsed.insert_single(spec.clone(), value);
                }
                Multiplicity::List => {
                    let values = match (from_command_line, &spec.default) {
                        (Some(values), _) => values,
                        (None, OptionDefault::List(default)) => default.clone(),
                        (None, _) => Vec::new(),
                    };
                    parsed.insert_list(spec.clone(), values);
                }
            }
        }

        OptionsParsed {
            registered: self.specs.len(),
            given: given_count,
        }
        .log();
        Ok(parsed)
    }
}

fn normalize_default(
    name: &str,
    default: OptionDefault,
    multiplicity: Multiplicity,
    var_type: VarType,
) -> Result<OptionDefault, OptionsError> {
    let check = |value: &OptionValue| {
        if value.var_type() == var_type {
            Ok(())
        } else {
            Err(OptionsError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
                kind: var_type,
            })
        }
    };
    match (multiplicity, default) {
        (_, OptionDefault::Required) => Ok(OptionDefault::Required),
        (Multiplicity::Singleton, OptionDefault::Value(v)) => {
            check(&v)?;
            Ok(OptionDefault::Value(v))
        }
        (Multiplicity::List, OptionDefault::Value(v)) => {
            check(&v)?;
            Ok(OptionDefault::List(vec![v]))
        }
        (Multiplicity::List, OptionDefault::List(values)) => {
            values.iter().try_for_each(check)?;
            Ok(OptionDefault::List(values))
        }
        (Multiplicity::Singleton, OptionDefault::List(values)) => Err(OptionsError::InvalidValue {
            name: name.to_string(),
            value: format!("{:?}", values),
            kind: var_type,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_parser() -> OptionParser {
        let mut parser = OptionParser::new();
        parser
            .register("geom", "", Multiplicity::Singleton, VarType::String, "")
            .unwrap();
        parser
    }

    #[test]
    fn test_given_value_is_returned() {
        let parsed = geometry_parser().parse_arguments(["geom=v11"]).unwrap();
        assert_eq!(parsed.string("geom").unwrap(), "v11");
    }

    #[test]
    fn test_no_input_yields_declared_default() {
        let parsed = geometry_parser()
            .parse_arguments(Vec::<String>::new())
            .unwrap();
        assert_eq!(parsed.string("geom").unwrap(), "");
    }

    #[test]
    fn test_token_without_equals_is_parse_error() {
        let err = geometry_parser().parse_arguments(["geom"]).unwrap_err();
        assert_eq!(
            err,
            OptionsError::Parse {
                token: "geom".to_string()
            }
        );
        assert!(matches!(
            geometry_parser().parse_arguments(["=v10"]),
            Err(OptionsError::Parse { .. })
        ));
    }

    #[test]
    fn test_required_option_without_value_is_missing_argument() {
        let mut parser = OptionParser::new();
        parser
            .register(
                "globalTag",
                OptionDefault::Required,
                Multiplicity::Singleton,
                VarType::String,
                "conditions tag",
            )
            .unwrap();
        assert_eq!(
            parser.parse_arguments(Vec::<&str>::new()).unwrap_err(),
            OptionsError::MissingArgument {
                name: "globalTag".to_string()
            }
        );
        let parsed = parser.parse_arguments(["globalTag=auto:run3_data"]).unwrap();
        assert_eq!(parsed.string("globalTag").unwrap(), "auto:run3_data");
    }

    #[test]
    fn test_unknown_keys_follow_policy() {
        assert_eq!(
            geometry_parser().parse_arguments(["geometry=D88"]).unwrap_err(),
            OptionsError::UnknownOption {
                name: "geometry".to_string()
            }
        );
        let parsed = geometry_parser()
            .unknown_keys(UnknownKeyPolicy::Ignore)
            .parse_arguments(["geometry=D88", "geom=v10"])
            .unwrap();
        assert_eq!(parsed.string("geom").unwrap(), "v10");
    }

    #[test]
    fn test_singleton_keeps_last_value() {
        let parsed = geometry_parser()
            .parse_arguments(["geom=v10", "geom=v11"])
            .unwrap();
        assert_eq!(parsed.string("geom").unwrap(), "v11");
    }

    #[test]
    fn test_lists_split_on_commas_and_replace_default_once() {
        let mut parser = OptionParser::standard();
        parser
            .set_default("inputFiles", OptionDefault::List(vec!["file:default.root".into()]))
            .unwrap();

        let untouched = parser.parse_arguments(Vec::<&str>::new()).unwrap();
        assert_eq!(untouched.strings("inputFiles").unwrap(), vec!["file:default.root"]);

        let parsed = parser
            .parse_arguments(["inputFiles=file:a.root,file:b.root", "inputFiles=file:c.root"])
            .unwrap();
        assert_eq!(
            parsed.strings("inputFiles").unwrap(),
            vec!["file:a.root", "file:b.root", "file:c.root"]
        );
    }

    #[test]
    fn test_standard_options_have_expected_defaults() {
        let parsed = OptionParser::standard()
            .parse_arguments(["maxEvents=10"])
            .unwrap();
        assert_eq!(parsed.int("maxEvents").unwrap(), 10);
        assert_eq!(parsed.string("outputFile").unwrap(), "output.root");
        assert!(parsed.strings("secondaryInputFiles").unwrap().is_empty());
    }

    #[test]
    fn test_bad_int_is_invalid_value() {
        assert!(matches!(
            OptionParser::standard().parse_arguments(["maxEvents=all"]),
            Err(OptionsError::InvalidValue { kind: VarType::Int, .. })
        ));
    }

    #[test]
    fn test_registration_checks_duplicates_and_default_type() {
        let mut parser = geometry_parser();
        assert!(matches!(
            parser.register("geom", "", Multiplicity::Singleton, VarType::String, ""),
            Err(OptionsError::AlreadyRegistered { .. })
        ));
        assert!(matches!(
            parser.register("verbosity", "loud", Multiplicity::Singleton, VarType::Int, ""),
            Err(OptionsError::InvalidValue { .. })
        ));
    }
}
