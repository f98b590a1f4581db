// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Sequencing of one artwork edit.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    thread,
};

use log::{debug, info};

use crate::{
    edit_error::EditError,
    locator::{self, ResolvedFile, ScopedRoot},
    replacer::{self, TempCopy},
    request::{ArtworkSpec, EditRequest},
    utilities, write_back,
};

/// Result of one successful edit.
#[derive(Debug)]
pub struct EditOutcome {
    /// The resolved file whose content was replaced.
    pub edited_file: PathBuf,

    /// The byte length written back.
    pub written_bytes: u64,
}

#[cfg_attr(test, mockall::automock)]
trait EditSteps {
    fn locate(
        &self,
        root: &ScopedRoot,
        target_name: &OsStr,
        search_inside_folders: bool,
    ) -> Result<Option<ResolvedFile>, EditError>;

    fn replace(&self, source_file: &Path, artwork: &ArtworkSpec) -> Result<TempCopy, EditError>;

    fn commit(&self, resolved: &ResolvedFile, content: &[u8]) -> Result<(), EditError>;
}

struct Editor;

impl EditSteps for Editor {
    fn locate(
        &self,
        root: &ScopedRoot,
        target_name: &OsStr,
        search_inside_folders: bool,
    ) -> Result<Option<ResolvedFile>, EditError> {
        locator::locate(root, target_name, search_inside_folders)
    }

    fn replace(&self, source_file: &Path, artwork: &ArtworkSpec) -> Result<TempCopy, EditError> {
        replacer::replace_artwork(source_file, artwork)
    }

    fn commit(&self, resolved: &ResolvedFile, content: &[u8]) -> Result<(), EditError> {
        write_back::commit(resolved, content)
    }
}

/// Edits the artwork of the file that `request` names, inside `root`.
///
/// The request is validated before the filesystem is touched. The temporary
/// copy is removed before this function returns, on success and on failure.
pub fn edit(request: &EditRequest, root: &ScopedRoot) -> Result<EditOutcome, EditError> {
    edit_on_steps(request, root, &Editor)
}

/// Runs one edit on a dedicated worker thread.
///
/// The caller waits for completion. There is no cancellation and no timeout,
/// an edit runs to completion or failure. A panicked worker is reported as
/// [`EditError::Unknown`].
pub fn edit_on_worker(request: EditRequest, root: ScopedRoot) -> Result<EditOutcome, EditError> {
    thread::spawn(move || edit(&request, &root))
        .join()
        .unwrap_or(Err(EditError::Unknown))
}

fn edit_on_steps<T: EditSteps>(
    request: &EditRequest,
    root: &ScopedRoot,
    steps: &T,
) -> Result<EditOutcome, EditError> {
    if request.artwork.bytes.is_empty() {
        return Err(EditError::MissingInput {
            field: "artworkBytes",
        });
    }

    let target_name = request
        .source_path
        .file_name()
        .ok_or(EditError::MissingInput { field: "data" })?;

    let resolved = steps
        .locate(root, target_name, request.search_inside_folders)?
        .ok_or_else(|| EditError::FileNotFound {
            name: target_name.to_string_lossy().into_owned(),
        })?;

    debug!("Resolved {:?} under the granted root.", resolved.path());

    let temporary_copy = steps.replace(&request.source_path, &request.artwork)?;

    info!(
        "Edited audio is {}.",
        utilities::format_file_size(temporary_copy.length())
    );

    let content = temporary_copy
        .read()
        .map_err(|error| EditError::IoError { error })?;

    steps.commit(&resolved, &content)?;

    Ok(EditOutcome {
        edited_file: resolved.path().to_path_buf(),
        written_bytes: content.len() as u64,
    })
}
