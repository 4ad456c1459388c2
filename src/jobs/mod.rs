// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod hgc_geom_analyzer;
mod hgcal_digi_study;
mod hgcal_wafer_validation;


pub use hgc_geom_analyzer::HgcGeomAnalyzer;
pub use hgcal_digi_study::HgcalDigiStudy;
pub use hgcal_wafer_validation::HgcalWaferValidation;

use crate::errors::BuildError;
use crate::traits::Job;

pub(crate) const CONDITIONS_FRAGMENT: &str =
    "Configuration.StandardSequences.FrontierConditions_GlobalTag_cff";
pub(crate) const MESSAGE_LOGGER_FRAGMENT: &str = "FWCore.MessageService.MessageLogger_cfi";

/// Factory for the jobs this crate can configure
pub struct JobFactory;

impl JobFactory {
    /// Create a job by name
    ///
    /// - "hgc_geom_analyzer" -> HgcGeomAnalyzer
    /// - "hgcal_digi_study" -> HgcalDigiStudy
    /// - "hgcal_wafer_validation" -> HgcalWaferValidation
    pub fn create(name: &str) -> Result<Box<dyn Job>, BuildError> {
        match name {
            "hgc_geom_analyzer" => Ok(Box::new(HgcGeomAnalyzer)),
            "hgcal_digi_study" => Ok(Box::new(HgcalDigiStudy)),
            "hgcal_wafer_validation" => Ok(Box::new(HgcalWaferValidation)),
            _ => Err(BuildError::UnknownJob {
                name: name.to_string(),
            }),
        }
    }

    /// List all available jobs
    pub fn list_available_jobs() -> Vec<&'static str> {
        vec!["hgc_geom_analyzer", "hgcal_digi_study", "hgcal_wafer_validation"]
    }

    pub fn is_job_available(name: &str) -> bool {
        Self::list_available_jobs().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_every_listed_job() {
        for name in JobFactory::list_available_jobs() {
            let job = JobFactory::create(name).unwrap();
            assert_eq!(job.name(), name);
            assert!(!job.description().is_empty());
            assert!(JobFactory::is_job_available(name));
        }
    }

    #[test]
    fn test_unknown_job() {
        assert!(matches!(
            JobFactory::create("hgcal_reco"),
            Err(BuildError::UnknownJob { name }) if name == "hgcal_reco"
        ));
        assert!(!JobFactory::is_job_available("hgcal_reco"));
    }
}
