// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process validation before the configuration is handed to the engine.
//!
//! # Validation Pipeline
//!
//! 1. **Label uniqueness**: a label names at most one object across modules,
//!    services, event-setup sources and producers, sequences, paths and the
//!    labels the engine provides
//! 2. **Reference resolution**: every path and sequence entry names a module,
//!    a sequence, or a provided label; no path is empty; the schedule names
//!    only existing paths and each of them once
//! 3. **Cycle detection**: sequences do not include each other in a loop
//!
//! Errors from the first two stages are accumulated so the whole list can be
//! reported at once. Cycle detection needs resolvable references and only
//! runs when the earlier stages found nothing.
//!
//! # Algorithms
//!
//! ## Label uniqueness
//! Every label is grouped with the categories that define it in an ordered
//! map, so duplicates are reported in declaration order.
//! - **Time Complexity**: O(L) where L = labels across all categories
//!
//! ## Reference resolution
//! Modules, sequences and provided labels go into a `HashSet`; each path and
//! sequence entry is one lookup.
//! - **Time Complexity**: O(L + E) where E = path and sequence entries
//!
//! ## Cycle detection
//! **Depth-first search with a recursion stack** over the sequence inclusion
//! graph. Reaching a sequence that is still on the stack closes a cycle, and
//! the stack slice from that sequence is the reported cycle.
//! - **Time Complexity**: O(S + I) where S = sequences, I = inclusions
//! - **Space Complexity**: O(S) for the visited set and recursion stack
//!
//! # Examples
//!
//! Validation runs as the last step of [`ProcessBuilder::build`], which
//! returns every problem found:
//!
//! ```rust
//! use hepconf::errors::{BuildError, ValidationError};
//! use hepconf::process::{Component, Module, ProcessBuilder};
//!
//! let mut builder = ProcessBuilder::new("TEST");
//! builder
//!     .source(Component::new("EmptySource"))
//!     .module("demo", Module::analyzer("DemoAnalyzer"))
//!     .path("p", ["demo", "missing"])
//!     .schedule(["p", "p"]);
//!
//! match builder.build() {
//!     Err(BuildError::Validation(errors)) => {
//!         assert!(errors.contains(&ValidationError::UnresolvedReference {
//!             owner: "p".into(),
//!             missing: "missing".into(),
//!         }));
//!         assert!(errors.contains(&ValidationError::DuplicateScheduledPath { path: "p".into() }));
//!     }
//!     other => panic!("expected validation errors, got {:?}", other),
//! }
//! ```
//!
//! [`ProcessBuilder::build`]: crate::process::ProcessBuilder::build

use crate::errors::ValidationError;
use crate::observability::messages::validation::CyclicSequenceDetected;
use crate::observability::messages::StructuredLog;
use crate::process::Process;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(crate) fn validate_process(process: &Process) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicates) = validate_unique_labels(process) {
        errors.extend(duplicates);
    }

    if let Err(unresolved) = validate_references(process) {
        errors.extend(unresolved);
    }

    if errors.is_empty() {
        if let Err(cycles) = validate_acyclic_sequences(process) {
            errors.extend(cycles);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every label with the categories that define it, in declaration order.
fn label_categories(process: &Process) -> IndexMap<&str, Vec<&'static str>> {
    let categories: [(&'static str, Vec<&str>); 7] = [
        ("module", process.modules.keys().map(String::as_str).collect()),
        ("service", process.services.keys().map(String::as_str).collect()),
        ("es_source", process.es_sources.keys().map(String::as_str).collect()),
        ("es_producer", process.es_producers.keys().map(String::as_str).collect()),
        ("sequence", process.sequences.keys().map(String::as_str).collect()),
        ("path", process.paths.keys().map(String::as_str).collect()),
        ("provided", process.provides.iter().map(String::as_str).collect()),
    ];

    let mut labels: IndexMap<&str, Vec<&'static str>> = IndexMap::new();
    for (category, names) in categories {
        for name in names {
            labels.entry(name).or_default().push(category);
        }
    }
    labels
}

fn validate_unique_labels(process: &Process) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = label_categories(process)
        .into_iter()
        .filter(|(_, categories)| categories.len() > 1)
        .map(|(label, categories)| ValidationError::DuplicateLabel {
            label: label.to_string(),
            categories,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_references(process: &Process) -> Result<(), Vec<ValidationError>> {
    let resolvable: HashSet<&str> = process
        .modules
        .keys()
        .chain(process.sequences.keys())
        .chain(process.provides.iter())
        .map(String::as_str)
        .collect();
    let mut errors = Vec::new();

    let owners = process
        .sequences
        .iter()
        .map(|(name, sequence)| (name, &sequence.entries))
        .chain(process.paths.iter().map(|(name, path)| (name, &path.entries)));
    for (owner, entries) in owners {
        for entry in entries {
            if !resolvable.contains(entry.as_str()) {
                errors.push(ValidationError::UnresolvedReference {
                    owner: owner.clone(),
                    missing: entry.clone(),
                });
            }
        }
    }

    for (name, path) in &process.paths {
        if path.entries.is_empty() {
            errors.push(ValidationError::EmptyPath { path: name.clone() });
        }
    }

    if let Some(schedule) = &process.schedule {
        let mut seen = HashSet::new();
        for path in schedule {
            if !process.paths.contains_key(path) {
                errors.push(ValidationError::UnknownScheduledPath { path: path.clone() });
            }
            if !seen.insert(path.as_str()) {
                errors.push(ValidationError::DuplicateScheduledPath { path: path.clone() });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// DFS over sequence-to-sequence inclusion with a recursion stack; a
/// back edge to a sequence still on the stack closes a cycle.
fn validate_acyclic_sequences(process: &Process) -> Result<(), Vec<ValidationError>> {
    let graph: IndexMap<&str, Vec<&str>> = process
        .sequences
        .iter()
        .map(|(name, sequence)| {
            let nested = sequence
                .entries
                .iter()
                .map(String::as_str)
                .filter(|entry| process.sequences.contains_key(*entry))
                .collect();
            (name.as_str(), nested)
        })
        .collect();

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    for &name in graph.keys() {
        if visited.contains(name) {
            continue;
        }
        if let Some(cycle) = dfs_cycle_detection(name, &graph, &mut visited, &mut rec_stack, &mut path) {
            CyclicSequenceDetected { cycle: &cycle }.log();
            return Err(vec![ValidationError::CyclicSequence { cycle }]);
        }
    }

    Ok(())
}

fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &IndexMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            } else if rec_stack.contains(neighbor) {
                let start = path.iter().position(|n| *n == neighbor).unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Component, MaxEvents, Module, Path, Sequence};

    fn create_test_process() -> Process {
        Process {
            name: "TEST".to_string(),
            era: None,
            fragments: Vec::new(),
            external_fragments: Vec::new(),
            provides: Vec::new(),
            source: Some(Component::new("EmptySource")),
            max_events: MaxEvents::default(),
            services: IndexMap::new(),
            es_sources: IndexMap::new(),
            es_producers: IndexMap::new(),
            modules: IndexMap::new(),
            sequences: IndexMap::new(),
            paths: IndexMap::new(),
            schedule: None,
        }
    }

    fn with_modules(labels: &[&str]) -> Process {
        let mut process = create_test_process();
        for label in labels {
            process
                .modules
                .insert(label.to_string(), Module::analyzer("DemoAnalyzer"));
        }
        process
    }

    #[test]
    fn test_valid_empty_process() {
        assert!(validate_process(&create_test_process()).is_ok());
    }

    #[test]
    fn test_valid_nested_sequences() {
        let mut process = with_modules(&["a", "b", "c"]);
        process.sequences.insert("inner".into(), Sequence::new(["a", "b"]));
        process.sequences.insert("outer".into(), Sequence::new(["inner", "c"]));
        process.paths.insert("p".into(), Path::new(["outer"]));
        assert!(validate_process(&process).is_ok());
    }

    #[test]
    fn test_provided_labels_resolve() {
        let mut process = with_modules(&["a"]);
        process.provides.push("RawToDigi".into());
        process.paths.insert("raw2digi".into(), Path::new(["RawToDigi"]));
        process.paths.insert("analysis".into(), Path::new(["a"]));
        assert!(validate_process(&process).is_ok());
    }

    #[test]
    fn test_duplicate_label_across_categories() {
        let mut process = with_modules(&["MessageLogger"]);
        process
            .services
            .insert("MessageLogger".into(), Component::new("MessageLogger"));
        process.paths.insert("p".into(), Path::new(["MessageLogger"]));

        let errors = validate_process(&process).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateLabel {
                label: "MessageLogger".into(),
                categories: vec!["module", "service"],
            }]
        );
    }

    #[test]
    fn test_errors_are_accumulated() {
        let mut process = with_modules(&["a"]);
        process.paths.insert("p".into(), Path::new(["a", "missing"]));
        process.paths.insert("empty".into(), Path::new(Vec::<String>::new()));
        process.schedule = Some(vec!["p".into(), "nope".into()]);

        let errors = validate_process(&process).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::UnresolvedReference {
            owner: "p".into(),
            missing: "missing".into(),
        }));
        assert!(errors.contains(&ValidationError::EmptyPath { path: "empty".into() }));
        assert!(errors.contains(&ValidationError::UnknownScheduledPath { path: "nope".into() }));
    }

    #[test]
    fn test_cyclic_sequences() {
        let mut process = with_modules(&["a"]);
        process.sequences.insert("s1".into(), Sequence::new(["a", "s2"]));
        process.sequences.insert("s2".into(), Sequence::new(["s3"]));
        process.sequences.insert("s3".into(), Sequence::new(["s1"]));
        process.paths.insert("p".into(), Path::new(["s1"]));

        let errors = validate_process(&process).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::CyclicSequence {
                cycle: vec!["s1".into(), "s2".into(), "s3".into(), "s1".into()],
            }]
        );
    }

    #[test]
    fn test_self_including_sequence() {
        let mut process = create_test_process();
        process.sequences.insert("loop".into(), Sequence::new(["loop"]));
        let errors = validate_process(&process).unwrap_err();
        assert!(matches!(&errors[0], ValidationError::CyclicSequence { cycle } if cycle.len() == 2));
    }

    #[test]
    fn test_cycle_detection_skipped_on_unresolved_references() {
        let mut process = create_test_process();
        process.sequences.insert("s1".into(), Sequence::new(["s1", "ghost"]));
        let errors = validate_process(&process).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_schedule_repeating_a_path() {
        let mut process = with_modules(&["a"]);
        process.paths.insert("p".into(), Path::new(["a"]));
        process.paths.insert("q".into(), Path::new(["a"]));
        process.schedule = Some(vec!["p".into(), "q".into(), "p".into()]);

        let errors = validate_process(&process).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicateScheduledPath { path: "p".into() }]);
    }

    #[test]
    fn test_provided_label_colliding_with_module() {
        let mut process = with_modules(&["RawToDigi"]);
        process.provides.push("RawToDigi".into());
        process.paths.insert("raw2digi".into(), Path::new(["RawToDigi"]));

        let errors = validate_process(&process).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateLabel {
                label: "RawToDigi".into(),
                categories: vec!["module", "provided"],
            }]
        );
    }
}
