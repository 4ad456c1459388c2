// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::builtin;
use crate::config::consts::FRAGMENT_EXTENSION;
use crate::config::{Fragment, FragmentOrigin, Settings};
use crate::errors::FragmentError;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves dotted fragment names to fragment definitions.
///
/// A name such as `Validation.HGCalValidation.hgcDigiStudy_cfi` is looked up
/// as `Validation/HGCalValidation/hgcDigiStudy_cfi.yaml` in each search
/// directory in turn, then among the built-in fragments. When neither has it
/// and external fragments are allowed, an empty external fragment is returned
/// and the engine resolves the name itself.
#[derive(Debug, Clone)]
pub struct FragmentLoader {
    search_paths: Vec<PathBuf>,
    allow_external: bool,
}

impl Default for FragmentLoader {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl FragmentLoader {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            search_paths: settings.fragment_path.clone(),
            allow_external: settings.allow_external,
        }
    }

    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    pub fn allow_external(mut self, allow: bool) -> Self {
        self.allow_external = allow;
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub fn load(&self, name: &str) -> Result<Fragment, FragmentError> {
        let relative = relative_path(name)?;

        let mut searched = Vec::with_capacity(self.search_paths.len());
        for dir in &self.search_paths {
            let candidate = dir.join(&relative);
            if candidate.is_file() {
                return load_file(name, &candidate);
            }
            searched.push(candidate);
        }

        if let Some(source) = builtin::lookup(name) {
            return parse(name, source, FragmentOrigin::BuiltIn);
        }

        if self.allow_external {
            return Ok(Fragment::external(name));
        }

        Err(FragmentError::NotFound {
            name: name.to_string(),
            searched,
        })
    }
}

/// Read one fragment file, naming it `name`.
pub fn load_file(name: &str, path: &Path) -> Result<Fragment, FragmentError> {
    let content = fs::read_to_string(path).map_err(|source| FragmentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(name, &content, FragmentOrigin::File(path.to_path_buf()))
}

fn parse(name: &str, source: &str, origin: FragmentOrigin) -> Result<Fragment, FragmentError> {
    let mut fragment: Fragment =
        serde_yaml::from_str(source).map_err(|source| FragmentError::Yaml {
            name: name.to_string(),
            source,
        })?;
    fragment.name = name.to_string();
    fragment.origin = origin;
    Ok(fragment)
}

fn relative_path(name: &str) -> Result<PathBuf, FragmentError> {
    let valid_component = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    };
    if !name.split('.').all(valid_component) {
        return Err(FragmentError::InvalidName {
            name: name.to_string(),
        });
    }
    let mut path: PathBuf = name.split('.').collect();
    path.set_extension(FRAGMENT_EXTENSION);
    Ok(path)
}
