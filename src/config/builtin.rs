// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fragments compiled into the binary.

const BUILTIN_FRAGMENTS: &[(&str, &str)] = &[
    (
        "Configuration.StandardSequences.FrontierConditions_GlobalTag_cff",
        include_str!("../../fragments/FrontierConditions_GlobalTag_cff.yaml"),
    ),
    (
        "Configuration.StandardSequences.RawToDigi_cff",
        include_str!("../../fragments/RawToDigi_cff.yaml"),
    ),
    (
        "FWCore.MessageService.MessageLogger_cfi",
        include_str!("../../fragments/MessageLogger_cfi.yaml"),
    ),
    (
        "Validation.HGCalValidation.hgcDigiStudy_cfi",
        include_str!("../../fragments/hgcDigiStudy_cfi.yaml"),
    ),
    (
        "Validation.HGCalValidation.hgcalWaferValidation_cfi",
        include_str!("../../fragments/hgcalWaferValidation_cfi.yaml"),
    ),
];

pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    BUILTIN_FRAGMENTS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
}

pub fn list_builtin_fragments() -> impl Iterator<Item = &'static str> {
    BUILTIN_FRAGMENTS.iter().map(|(name, _)| *name)
}
