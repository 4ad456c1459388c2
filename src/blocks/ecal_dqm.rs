// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parameters shared by the ECAL data-quality monitoring workers.

use crate::pset::{Parameter, ParameterSet, Value};

/// Laser wavelengths. A plain list for the workers' own configuration code,
/// not part of [`ecal_dqm_parameters`].
pub const LASER_WAVELENGTHS: [i32; 3] = [1, 2, 3];

pub fn ecal_common_params() -> Parameter {
    Parameter::untracked(
        ParameterSet::new()
            .with("onlineMode", Parameter::untracked(false))
            .with("willConvertToEDM", Parameter::untracked(true)),
    )
}

pub fn led_wavelengths() -> Parameter {
    Parameter::untracked(Value::VInt32(vec![1, 2]))
}

pub fn mgpa_gains() -> Parameter {
    Parameter::untracked(Value::VInt32(vec![12]))
}

pub fn mgpa_gains_pn() -> Parameter {
    Parameter::untracked(Value::VInt32(vec![16]))
}

/// All of the above as one set, keyed by their configuration names.
pub fn ecal_dqm_parameters() -> ParameterSet {
    ParameterSet::new()
        .with("ecalCommonParams", ecal_common_params())
        .with("ecaldqmLedWavelengths", led_wavelengths())
        .with("ecaldqmMGPAGains", mgpa_gains())
        .with("ecaldqmMGPAGainsPN", mgpa_gains_pn())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_params_are_untracked() {
        let params = ecal_common_params();
        assert!(!params.tracked);
        let pset = params.value.as_pset().unwrap();
        assert_eq!(pset.value("onlineMode").unwrap(), &Value::Bool(false));
        assert_eq!(pset.value("willConvertToEDM").unwrap(), &Value::Bool(true));
        assert!(pset.iter().all(|(_, p)| !p.tracked));
    }

    #[test]
    fn test_gain_lists() {
        assert_eq!(led_wavelengths().value, Value::VInt32(vec![1, 2]));
        assert_eq!(mgpa_gains().value, Value::VInt32(vec![12]));
        assert_eq!(mgpa_gains_pn().value, Value::VInt32(vec![16]));
        let names: Vec<_> = ecal_dqm_parameters().names().map(str::to_string).collect();
        assert_eq!(names.len(), 4);
        assert!(!names.iter().any(|name| name == "ecaldqmLaserWavelengths"));
        assert_eq!(LASER_WAVELENGTHS, [1, 2, 3]);
    }
}
