// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BuildError;
use crate::modifiers::modifier::apply_modifications;
use crate::modifiers::{Modification, Modifier, ModificationTarget};

/// Something a chain can be composed from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainMember {
    Modifier(Modifier),
    Chain(ModifierChain),
}

impl From<Modifier> for ChainMember {
    fn from(modifier: Modifier) -> Self {
        ChainMember::Modifier(modifier)
    }
}

impl From<ModifierChain> for ChainMember {
    fn from(chain: ModifierChain) -> Self {
        ChainMember::Chain(chain)
    }
}

/// An ordered, flattened composition of modifiers.
///
/// Nested chains are expanded in place when the chain is created. A modifier
/// reached more than once keeps its first position, so every modifier is
/// applied exactly once and in a deterministic order. The name of every
/// nested chain is kept together with the modifiers it contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierChain {
    name: String,
    modifiers: Vec<Modifier>,
    chains: Vec<NestedChain>,
}

#[derive(Debug, Clone, PartialEq)]
struct NestedChain {
    name: String,
    members: Vec<String>,
}

/// An era is a modifier chain given a well-known name.
pub type Era = ModifierChain;

impl ModifierChain {
    pub fn new<I, M>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<ChainMember>,
    {
        let mut chain = Self {
            name: name.into(),
            modifiers: Vec::new(),
            chains: Vec::new(),
        };
        for member in members {
            chain.push(member.into());
        }
        chain
    }

    fn push(&mut self, member: ChainMember) {
        match member {
            ChainMember::Modifier(modifier) => {
                if !self.modifiers.iter().any(|m| m.name() == modifier.name()) {
                    self.modifiers.push(modifier);
                }
            }
            ChainMember::Chain(chain) => {
                let members = chain.modifier_names().map(str::to_string).collect();
                self.record_chain(NestedChain {
                    name: chain.name,
                    members,
                });
                for nested in chain.chains {
                    self.record_chain(nested);
                }
                for modifier in chain.modifiers {
                    self.push(ChainMember::Modifier(modifier));
                }
            }
        }
    }

    fn record_chain(&mut self, nested: NestedChain) {
        match self.chains.iter_mut().find(|c| c.name == nested.name) {
            Some(known) => {
                for member in nested.members {
                    if !known.members.contains(&member) {
                        known.members.push(member);
                    }
                }
            }
            None => self.chains.push(nested),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Modifiers in application order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn modifier_names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(Modifier::name)
    }

    /// Names of the chains this chain was composed from.
    pub fn chain_names(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(|c| c.name.as_str())
    }

    /// True when `name` is one of this chain's modifiers, the chain itself,
    /// or a chain it was composed from.
    pub fn contains(&self, name: &str) -> bool {
        self.name == name
            || self.chains.iter().any(|c| c.name == name)
            || self.modifiers.iter().any(|m| m.name() == name)
    }

    /// A copy of this chain without the named modifiers or chains.
    ///
    /// Excluding a nested chain drops every modifier it contributed. A nested
    /// chain left with none of its modifiers is dropped as well.
    pub fn copy_and_exclude(&self, name: impl Into<String>, excluded: &[&str]) -> Self {
        let mut dropped: Vec<&str> = excluded.to_vec();
        for chain in self.chains.iter().filter(|c| excluded.contains(&c.name.as_str())) {
            dropped.extend(chain.members.iter().map(String::as_str));
        }

        let chains = self
            .chains
            .iter()
            .filter(|c| !excluded.contains(&c.name.as_str()))
            .filter_map(|c| {
                let members: Vec<String> = c
                    .members
                    .iter()
                    .filter(|m| !dropped.contains(&m.as_str()))
                    .cloned()
                    .collect();
                if members.is_empty() && !c.members.is_empty() {
                    None
                } else {
                    Some(NestedChain {
                        name: c.name.clone(),
                        members,
                    })
                }
            })
            .collect();

        Self {
            name: name.into(),
            modifiers: self
                .modifiers
                .iter()
                .filter(|m| !dropped.contains(&m.name()))
                .cloned()
                .collect(),
            chains,
        }
    }

    /// A copy of this chain with `member` appended.
    pub fn copy_and_add(&self, name: impl Into<String>, member: impl Into<ChainMember>) -> Self {
        let mut chain = Self {
            name: name.into(),
            modifiers: Vec::new(),
            chains: Vec::new(),
        };
        chain.push(ChainMember::Chain(self.clone()));
        chain.push(member.into());
        chain
    }

    /// Position after which modifications registered against `chain` run.
    fn closing_index(&self, chain: &NestedChain) -> Option<usize> {
        chain
            .members
            .iter()
            .filter_map(|member| self.modifiers.iter().position(|m| m.name() == member))
            .max()
    }

    /// Apply every modifier in order.
    ///
    /// `registered` holds modifications attached by name from outside a
    /// modifier's definition, such as those declared in loaded fragments.
    /// Entries naming a modifier run right after that modifier's own
    /// modifications. Entries naming a nested chain run after the last
    /// modifier that chain contributed, and entries naming this chain run
    /// once every modifier has been applied.
    pub fn apply<T>(&self, target: &mut T, registered: &[(String, Modification)]) -> Result<(), BuildError>
    where
        T: ModificationTarget + ?Sized,
    {
        let chains: Vec<&NestedChain> = self
            .chains
            .iter()
            .filter(|c| !self.has_modifier(&c.name))
            .collect();
        for (index, modifier) in self.modifiers.iter().enumerate() {
            modifier.apply(target, registered_for(registered, modifier.name()))?;
            for chain in &chains {
                if self.closing_index(chain) == Some(index) {
                    apply_modifications(&chain.name, target, registered_for(registered, &chain.name))?;
                }
            }
        }
        for chain in &chains {
            if self.closing_index(chain).is_none() {
                apply_modifications(&chain.name, target, registered_for(registered, &chain.name))?;
            }
        }
        // A single-modifier era shares its modifier's name.
        if self.has_modifier(&self.name) || self.chains.iter().any(|c| c.name == self.name) {
            return Ok(());
        }
        apply_modifications(&self.name, target, registered_for(registered, &self.name))
    }

    fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.name() == name)
    }
}

fn registered_for<'a>(
    registered: &'a [(String, Modification)],
    name: &'a str,
) -> impl Iterator<Item = &'a Modification> {
    registered
        .iter()
        .filter(move |(owner, _)| owner == name)
        .map(|(_, modification)| modification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::Edit;
    use crate::pset::{Parameter, ParameterSet, Value};
    use std::collections::HashMap;

    struct Table(HashMap<String, ParameterSet>);

    impl ModificationTarget for Table {
        fn parameters_mut(&mut self, label: &str) -> Option<&mut ParameterSet> {
            self.0.get_mut(label)
        }
    }

    fn table() -> Table {
        Table(HashMap::from([(
            "digis".to_string(),
            ParameterSet::new().with("threshold", Parameter::tracked(0)),
        )]))
    }

    fn threshold(table: &Table) -> &Value {
        table.0["digis"].value("threshold").unwrap()
    }

    fn a() -> Modifier {
        Modifier::new("a").to_modify("digis", [Edit::set("threshold", 1)])
    }

    fn b() -> Modifier {
        Modifier::new("b").to_modify("digis", [Edit::set("threshold", 2)])
    }

    #[test]
    fn test_order_of_members_decides_the_outcome() {
        let mut ab = table();
        ModifierChain::new("ab", [a(), b()]).apply(&mut ab, &[]).unwrap();
        let mut ba = table();
        ModifierChain::new("ba", [b(), a()]).apply(&mut ba, &[]).unwrap();

        assert_eq!(threshold(&ab), &Value::Int32(2));
        assert_eq!(threshold(&ba), &Value::Int32(1));
    }

    #[test]
    fn test_chain_matches_sequential_application() {
        let mut chained = table();
        ModifierChain::new("ab", [a(), b()]).apply(&mut chained, &[]).unwrap();

        let mut sequential = table();
        a().apply(&mut sequential, std::iter::empty::<&Modification>()).unwrap();
        b().apply(&mut sequential, std::iter::empty::<&Modification>()).unwrap();

        assert_eq!(chained.0, sequential.0);
    }

    #[test]
    fn test_nested_chains_are_flattened_and_deduplicated() {
        let inner = ModifierChain::new("inner", [a(), b()]);
        let outer = ModifierChain::new(
            "outer",
            [ChainMember::from(inner), ChainMember::from(a()), ChainMember::from(Modifier::new("c"))],
        );
        assert_eq!(outer.modifier_names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert!(outer.contains("inner"));
        assert!(outer.contains("outer"));
        assert!(outer.contains("c"));
        assert!(!outer.contains("d"));
    }

    #[test]
    fn test_copies_exclude_and_add() {
        let base = ModifierChain::new("base", [a(), b()]);
        let without_b = base.copy_and_exclude("noB", &["b"]);
        assert_eq!(without_b.modifier_names().collect::<Vec<_>>(), ["a"]);
        assert!(!without_b.contains("b"));

        let extended = without_b.copy_and_add("withC", Modifier::new("c"));
        assert_eq!(extended.modifier_names().collect::<Vec<_>>(), ["a", "c"]);
        assert!(extended.contains("noB"));
        assert_eq!(base.modifiers().len(), 2);
    }

    #[test]
    fn test_registered_modifications_run_after_the_modifier() {
        let registered = vec![(
            "a".to_string(),
            Modification::new("digis", [Edit::set("threshold", 7)]),
        )];
        let mut target = table();
        ModifierChain::new("only_a", [a()]).apply(&mut target, &registered).unwrap();
        assert_eq!(threshold(&target), &Value::Int32(7));

        let mut untouched = table();
        ModifierChain::new("only_b", [b()]).apply(&mut untouched, &registered).unwrap();
        assert_eq!(threshold(&untouched), &Value::Int32(2));
    }

    #[test]
    fn test_excluding_a_nested_chain_drops_its_modifiers() {
        let inner = ModifierChain::new("inner", [a(), b()]);
        let outer = ModifierChain::new(
            "outer",
            [ChainMember::from(inner), ChainMember::from(Modifier::new("c"))],
        );

        let without_inner = outer.copy_and_exclude("noInner", &["inner"]);
        assert_eq!(without_inner.modifier_names().collect::<Vec<_>>(), ["c"]);
        assert!(!without_inner.contains("inner"));
        assert!(!without_inner.contains("a"));

        let without_members = outer.copy_and_exclude("noAB", &["a", "b"]);
        assert_eq!(without_members.modifier_names().collect::<Vec<_>>(), ["c"]);
        assert!(!without_members.contains("inner"));

        let partly = outer.copy_and_exclude("noA", &["a"]);
        assert!(partly.contains("inner"));
        assert_eq!(partly.chain_names().collect::<Vec<_>>(), ["inner"]);
    }

    #[test]
    fn test_copy_and_add_keeps_the_parent_chain_excludable() {
        let base = ModifierChain::new("base", [a(), b()]);
        let extended = base.copy_and_add("extended", Modifier::new("c"));
        let trimmed = extended.copy_and_exclude("trimmed", &["base"]);
        assert_eq!(trimmed.modifier_names().collect::<Vec<_>>(), ["c"]);
        assert!(!trimmed.contains("base"));
    }

    #[test]
    fn test_modifications_registered_against_chains_run_after_their_members() {
        let inner = ModifierChain::new("inner", [a()]);
        let outer = ModifierChain::new("outer", [ChainMember::from(inner), ChainMember::from(b())]);

        let mut target = table();
        let after_inner = vec![(
            "inner".to_string(),
            Modification::new("digis", [Edit::set("threshold", 5)]),
        )];
        outer.apply(&mut target, &after_inner).unwrap();
        assert_eq!(threshold(&target), &Value::Int32(2));

        let mut target = table();
        let after_all = vec![(
            "outer".to_string(),
            Modification::new("digis", [Edit::set("threshold", 6)]),
        )];
        outer.apply(&mut target, &after_all).unwrap();
        assert_eq!(threshold(&target), &Value::Int32(6));
    }

    #[test]
    fn test_single_modifier_chain_applies_registrations_once() {
        let counter = Modifier::new("counter");
        let chain = ModifierChain::new("counter", [counter]);
        let registered = vec![(
            "counter".to_string(),
            Modification::new("digis", [Edit::insert("steps", 0, 1)]),
        )];
        let mut target = Table(HashMap::from([(
            "digis".to_string(),
            ParameterSet::new().with("steps", Parameter::tracked(Value::VInt32(vec![]))),
        )]));
        chain.apply(&mut target, &registered).unwrap();
        assert_eq!(target.0["digis"].value("steps").unwrap(), &Value::VInt32(vec![1]));
    }
}
