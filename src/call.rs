// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The loosely-typed surface offered to host callers.
//!
//! Hosts hand over a bag of optional fields and get a bare boolean back.
//! Failure detail reaches only the logging channel, categorized by target
//! name.

use std::path::PathBuf;

use log::{error, info, warn};

use crate::{
    edit_error::EditError,
    editor,
    preferences::PreferenceStore,
    request::{ArtworkFormat, ArtworkSpec, EditRequest},
};

const ERROR_TARGET: &str = "on_audio_error";
const EXCEPTION_TARGET: &str = "on_audio_exception";
const FILE_NOT_FOUND_TARGET: &str = "on_audio_FileNotFound";
const IO_EXCEPTION_TARGET: &str = "on_audio_IOException";

/// Arguments of one host call. All fields are optional until validated.
#[derive(Debug, Default, Clone)]
pub struct CallArguments {
    /// Path of the source audio file. Only its file name is used for
    /// resolution under the granted root.
    pub data: Option<String>,

    pub artwork_bytes: Option<Vec<u8>>,

    /// Integer code of the artwork format, see [`ArtworkFormat::from_code`].
    pub format_code: Option<i64>,

    pub description: Option<String>,

    pub size: Option<u32>,

    pub search_inside_folders: Option<bool>,
}

/// Edits artwork for one host call.
///
/// A missing required field fails immediately, before the filesystem is
/// touched. The granted root is read from `preferences` once per call. The
/// edit itself runs on a worker thread, this function waits for it.
pub fn edit_artwork_call(arguments: CallArguments, preferences: &PreferenceStore) -> bool {
    let request = match build_request(arguments) {
        Ok(request) => request,
        Err(error) => {
            error!(target: ERROR_TARGET, "{error}");

            return false;
        }
    };

    let Some(root) = preferences.scoped_root() else {
        log_failure(&EditError::NoGrantedRoot);

        return false;
    };

    match editor::edit_on_worker(request, root) {
        Ok(outcome) => {
            info!("Edited {:?}.", outcome.edited_file);

            true
        }
        Err(error) => {
            log_failure(&error);

            false
        }
    }
}

fn build_request(arguments: CallArguments) -> Result<EditRequest, EditError> {
    let artwork_bytes = arguments.artwork_bytes.ok_or(EditError::MissingInput {
        field: "artworkBytes",
    })?;
    let data = arguments
        .data
        .ok_or(EditError::MissingInput { field: "data" })?;
    let format = arguments
        .format_code
        .and_then(ArtworkFormat::from_code)
        .ok_or(EditError::MissingInput { field: "type" })?;
    let description = arguments.description.ok_or(EditError::MissingInput {
        field: "description",
    })?;
    let size = arguments
        .size
        .ok_or(EditError::MissingInput { field: "size" })?;
    let search_inside_folders =
        arguments
            .search_inside_folders
            .ok_or(EditError::MissingInput {
                field: "searchInsideFolders",
            })?;

    Ok(EditRequest {
        source_path: PathBuf::from(data),
        artwork: ArtworkSpec {
            bytes: artwork_bytes,
            format,
            description,
            size,
        },
        search_inside_folders,
    })
}

fn log_failure(error: &EditError) {
    match error {
        EditError::MissingInput { .. } => error!(target: ERROR_TARGET, "{error}"),
        EditError::FileNotFound { .. } => warn!(
            target: FILE_NOT_FOUND_TARGET,
            "{error} Let the user choose the root folder again."
        ),
        EditError::CopyError { .. } | EditError::IoError { .. } => {
            warn!(target: IO_EXCEPTION_TARGET, "{error}")
        }
        _ => warn!(target: EXCEPTION_TARGET, "{error}"),
    }
}
