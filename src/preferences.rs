// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Persistent preferences holding the granted root folder.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locator::ScopedRoot;

/// The persisted preference entries.
///
/// The edit path only reads these. Recording a grant is the business of the
/// external permission flow, surfaced here as [`PreferenceStore::record_grant`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Location of the root folder the user granted access to.
    pub scoped_root: Option<String>,
}

/// Error about the preference file.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("The preference file ({path}) cannot be read: {error}")]
    CannotRead { path: PathBuf, error: io::Error },

    #[error("The preference file ({path}) cannot be parsed: {cause}")]
    CannotParse { path: PathBuf, cause: String },

    #[error("The preferences cannot be serialized: {cause}")]
    CannotSerialize { cause: String },

    #[error("The preference file ({path}) cannot be written: {error}")]
    CannotWrite { path: PathBuf, error: io::Error },
}

/// Reads and writes one preference file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PreferenceStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the preferences. A missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PreferenceError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|error| PreferenceError::CannotRead {
                path: self.path.clone(),
                error,
            })?;

        toml::from_str(&content).map_err(|error| PreferenceError::CannotParse {
            path: self.path.clone(),
            cause: error.to_string(),
        })
    }

    pub fn store(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        let content =
            toml::to_string(preferences).map_err(|error| PreferenceError::CannotSerialize {
                cause: error.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|error| PreferenceError::CannotWrite {
            path: self.path.clone(),
            error,
        })
    }

    /// The granted root, when one has been recorded.
    ///
    /// An unreadable or unparsable preference file counts as no grant.
    pub fn scoped_root(&self) -> Option<ScopedRoot> {
        self.load()
            .ok()?
            .scoped_root
            .filter(|location| !location.is_empty())
            .map(ScopedRoot::new)
    }

    /// Records `root` as the granted root folder.
    pub fn record_grant<P: AsRef<Path>>(&self, root: P) -> Result<(), PreferenceError> {
        let mut preferences = self.load()?;

        preferences.scoped_root = Some(root.as_ref().to_string_lossy().into_owned());

        self.store(&preferences)
    }
}
