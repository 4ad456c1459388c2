// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Named eras known to the builder.
//!
//! The catalog modifiers carry no edits of their own. What they change is
//! registered against them by the fragments a job loads, so a job only pays
//! for the modifications that touch objects it actually defines.

use crate::errors::BuildError;
use crate::modifiers::{ChainMember, Era, Modifier, ModifierChain};

const ERAS: &[&str] = &["Run3", "Run3_2024", "Phase2", "Phase2C8", "Phase2C11M9"];

const MODIFIERS: &[&str] = &[
    "run3_common",
    "run3_GEM",
    "run3_HB",
    "run3_ecal",
    "run3_2024_L1T",
    "phase2_common",
    "phase2_tracker",
    "phase2_muon",
    "phase2_hgcal",
    "phase2_timing",
    "phase2_hgcalV10",
    "phase2_hgcalV12",
    "phase2_GEM",
];

fn modifiers(names: &[&str]) -> Vec<ChainMember> {
    names.iter().map(|name| Modifier::new(*name).into()).collect()
}

fn run3() -> Era {
    ModifierChain::new(
        "Run3",
        modifiers(&["run3_common", "run3_GEM", "run3_HB", "run3_ecal"]),
    )
}

fn run3_2024() -> Era {
    ModifierChain::new(
        "Run3_2024",
        [
            ChainMember::from(run3()),
            ChainMember::from(Modifier::new("run3_2024_L1T")),
        ],
    )
}

fn phase2() -> Era {
    ModifierChain::new(
        "Phase2",
        modifiers(&[
            "phase2_common",
            "phase2_tracker",
            "phase2_muon",
            "phase2_hgcal",
            "phase2_timing",
        ]),
    )
}

fn phase2_c8() -> Era {
    phase2().copy_and_add("Phase2C8", Modifier::new("phase2_hgcalV10"))
}

fn phase2_c11m9() -> Era {
    phase2()
        .copy_and_add("Phase2C11", Modifier::new("phase2_hgcalV12"))
        .copy_and_add("Phase2C11M9", Modifier::new("phase2_GEM"))
}

/// Look an era up by name. A known modifier name gives a chain holding just
/// that modifier.
pub fn era(name: &str) -> Result<Era, BuildError> {
    match name {
        "Run3" => Ok(run3()),
        "Run3_2024" => Ok(run3_2024()),
        "Phase2" => Ok(phase2()),
        "Phase2C8" => Ok(phase2_c8()),
        "Phase2C11M9" => Ok(phase2_c11m9()),
        _ if MODIFIERS.contains(&name) => Ok(ModifierChain::new(name, [Modifier::new(name)])),
        _ => Err(BuildError::UnknownEra {
            name: name.to_string(),
        }),
    }
}

pub fn list_eras() -> &'static [&'static str] {
    ERAS
}

pub fn list_modifiers() -> &'static [&'static str] {
    MODIFIERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run3_2024_extends_run3() {
        let era = era("Run3_2024").unwrap();
        let names: Vec<_> = era.modifier_names().collect();
        assert_eq!(
            names,
            ["run3_common", "run3_GEM", "run3_HB", "run3_ecal", "run3_2024_L1T"]
        );
        assert!(era.contains("Run3"));
        assert!(!run3().contains("run3_2024_L1T"));
    }

    #[test]
    fn test_phase2_eras_share_the_base() {
        let c8 = era("Phase2C8").unwrap();
        let c11 = era("Phase2C11M9").unwrap();
        assert!(c8.contains("phase2_hgcal") && c11.contains("phase2_hgcal"));
        assert!(c8.contains("phase2_hgcalV10") && !c8.contains("phase2_hgcalV12"));
        assert!(c11.contains("phase2_GEM") && c11.contains("Phase2C11"));
    }

    #[test]
    fn test_every_listed_era_resolves() {
        for name in list_eras() {
            assert_eq!(era(name).unwrap().name(), *name);
        }
    }

    #[test]
    fn test_modifier_names_resolve_to_single_chains() {
        let l1t = era("run3_2024_L1T").unwrap();
        assert_eq!(l1t.modifier_names().collect::<Vec<_>>(), ["run3_2024_L1T"]);
        for name in list_modifiers() {
            assert!(era(name).is_ok());
        }
    }

    #[test]
    fn test_unknown_era_is_rejected() {
        assert!(matches!(era("Run4"), Err(BuildError::UnknownEra { name }) if name == "Run4"));
    }

    #[test]
    fn test_run3_2024_without_run3_keeps_only_l1t() {
        let trimmed = era("Run3_2024").unwrap().copy_and_exclude("noRun3", &["Run3"]);
        assert_eq!(trimmed.modifier_names().collect::<Vec<_>>(), ["run3_2024_L1T"]);
        assert!(!trimmed.contains("Run3"));
        assert!(!trimmed.contains("run3_common"));
    }
}
