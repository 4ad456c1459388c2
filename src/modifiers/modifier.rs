// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{BuildError, ParameterError};
use crate::modifiers::{Edit, Modification};
use crate::observability::messages::builder::{ModificationSkipped, ModifierApplied};
use crate::observability::messages::StructuredLog;
use crate::pset::ParameterSet;

/// Anything whose labelled parameter sets a modifier can reach.
pub trait ModificationTarget {
    fn parameters_mut(&mut self, label: &str) -> Option<&mut ParameterSet>;
}

/// A named unit of configuration change.
///
/// A modifier is active when it is part of the era a process is built with;
/// its modifications are then applied in the order they were registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    name: String,
    modifications: Vec<Modification>,
}

impl Modifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifications: Vec::new(),
        }
    }

    /// Register edits for `target`, applied whenever this modifier is active.
    pub fn to_modify(mut self, target: impl Into<String>, edits: impl IntoIterator<Item = Edit>) -> Self {
        self.modifications.push(Modification::new(target, edits));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    /// Apply this modifier's own modifications followed by `extra`.
    ///
    /// Targets missing from `target` are skipped.
    pub fn apply<'a, T, I>(&'a self, target: &mut T, extra: I) -> Result<(), BuildError>
    where
        T: ModificationTarget + ?Sized,
        I: IntoIterator<Item = &'a Modification>,
    {
        apply_modifications(&self.name, target, self.modifications.iter().chain(extra))
    }
}

/// Apply `modifications` on behalf of `owner`, a modifier or chain name.
pub(super) fn apply_modifications<'a, T, I>(owner: &str, target: &mut T, modifications: I) -> Result<(), BuildError>
where
    T: ModificationTarget + ?Sized,
    I: IntoIterator<Item = &'a Modification>,
{
    let mut applied = 0;
    for modification in modifications {
        let Some(pset) = target.parameters_mut(&modification.target) else {
            ModificationSkipped {
                modifier: owner,
                target: &modification.target,
            }
            .log();
            continue;
        };
        modification
            .apply(pset)
            .map_err(|source: ParameterError| BuildError::Edit {
                label: modification.target.clone(),
                source,
            })?;
        applied += 1;
    }
    ModifierApplied {
        modifier: owner,
        modification_count: applied,
    }
    .log();
    Ok(())
}
