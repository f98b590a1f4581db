// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Resolution of files inside the user-granted root folder.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use crate::edit_error::EditError;

/// The root folder the user granted access to.
///
/// Obtained from the preference store once per request. Direct paths are not
/// trusted, files are resolved by name under this root instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedRoot {
    path: PathBuf,
}

impl ScopedRoot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ScopedRoot {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A file resolved under the granted root, valid for one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    path: PathBuf,
}

impl ResolvedFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        ResolvedFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Finds the file named `target_name` under the root.
///
/// The listing is scanned in directory order and the first match wins. When
/// `search_inside_folders` is false, the first folder entry ends the whole
/// search, even if a matching file would follow it. Callers that keep files
/// next to folders must enable the recursive search.
pub fn locate(
    root: &ScopedRoot,
    target_name: &OsStr,
    search_inside_folders: bool,
) -> Result<Option<ResolvedFile>, EditError> {
    search(root.path(), target_name, search_inside_folders)
        .map(|found| found.map(ResolvedFile::new))
        .map_err(|error| EditError::RootNotAccessible {
            path: root.path().to_path_buf(),
            error,
        })
}

fn search(
    directory: &Path,
    target_name: &OsStr,
    search_inside_folders: bool,
) -> io::Result<Option<PathBuf>> {
    for entry in fs::read_dir(directory)? {
        let entry = entry?;

        let found = if entry.file_type()?.is_dir() {
            if !search_inside_folders {
                return Ok(None);
            }

            search(&entry.path(), target_name, search_inside_folders)?
        } else if entry.file_name() == target_name {
            Some(entry.path())
        } else {
            None
        };

        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}
