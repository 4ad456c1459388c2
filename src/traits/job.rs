// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::FragmentLoader;
use crate::errors::{BuildError, OptionsError};
use crate::observability::messages::options::OptionsSelected;
use crate::observability::messages::StructuredLog;
use crate::options::{OptionParser, ParsedOptions};
use crate::process::Process;

/// A configuration the builder knows how to produce.
///
/// A job declares its command-line options, then turns the parsed values
/// into a [`Process`].
pub trait Job {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Options understood by this job, with their defaults.
    fn options(&self) -> Result<OptionParser, OptionsError>;

    fn configure(
        &self,
        options: &ParsedOptions,
        loader: &FragmentLoader,
    ) -> Result<Process, BuildError>;

    /// Parse `key=value` tokens and configure the job from them.
    fn run(&self, tokens: &[String], loader: &FragmentLoader) -> Result<Process, BuildError> {
        let options = self.options()?.parse_arguments(tokens)?;
        OptionsSelected {
            job: self.name(),
            options: &options,
        }
        .log();
        self.configure(&options, loader)
    }
}
