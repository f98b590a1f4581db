// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! This module has the function that called by the main function.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info};
use thiserror::Error;

use crate::{
    edit_error::EditError,
    editor::{self, EditOutcome},
    locator::ScopedRoot,
    preferences::{PreferenceError, PreferenceStore},
    request::{ArtworkFormat, ArtworkSpec, EditRequest},
};

/// The struct for setting.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Edit the embedded artwork of an audio file inside the granted root folder."
)]
pub struct Setting {
    #[arg(
        long,
        value_name = "DIRECTORY",
        value_parser = is_directory,
        help = "Record DIRECTORY as the granted root folder before editing."
    )]
    grant_root: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        default_value = "edit-artwork.toml",
        help = "The preference file holding the granted root folder."
    )]
    preference_file: PathBuf,

    #[arg(
        short,
        long,
        default_value = "",
        help = "A description stored with the artwork."
    )]
    description: String,

    #[arg(
        short,
        long,
        value_name = "PIXELS",
        default_value_t = 0,
        help = "A declared edge length of the artwork, used as both width and height."
    )]
    size: u32,

    #[arg(
        short = 'r',
        long,
        help = "Search folders inside the granted root folder."
    )]
    search_inside_folders: bool,

    #[arg(
        required = true,
        value_name = "ARTWORK_FILE",
        value_parser = is_artwork_file,
        help = "A JPEG, PNG, GIF, BMP or TIFF image file."
    )]
    artwork_file: PathBuf,

    #[arg(
        required = true,
        value_name = "SOURCE_FILE",
        help = "An audio file, resolved by name inside the granted root folder."
    )]
    source_file: PathBuf,
}

/// Result of edit_artwork.
#[derive(Debug)]
pub struct OutputResult {
    /// The path of the edited audio file.
    pub edited_file: PathBuf,

    /// The byte length written back to it.
    pub written_bytes: u64,
}

/// Error of edit_artwork.
#[derive(Error, Debug)]
pub enum EditArtworkError {
    #[error("The preference file cannot be used: {0}")]
    PreferenceFileCannotBeUsed(PreferenceError),

    #[error("No root folder has been granted.")]
    NoGrantedRoot,

    #[error("The artwork `{0}` cannot be read: {1}")]
    ArtworkCannotBeRead(PathBuf, io::Error),

    #[error("The format of `{0}` is not supported.")]
    ArtworkFormatIsNotSupported(PathBuf),

    #[error("Editing is failed: {0}")]
    EditingIsFailed(EditError),
}

#[cfg_attr(test, mockall::automock)]
trait EditArtworkRunner {
    fn record_grant(&self, store: &PreferenceStore, root: &Path) -> Result<(), PreferenceError>;

    fn scoped_root(&self, store: &PreferenceStore) -> Option<ScopedRoot>;

    fn read_artwork(&self, file: &Path) -> io::Result<Vec<u8>>;

    fn run_edit(&self, request: EditRequest, root: ScopedRoot) -> Result<EditOutcome, EditError>;
}

struct EditArtwork;

impl EditArtworkRunner for EditArtwork {
    fn record_grant(&self, store: &PreferenceStore, root: &Path) -> Result<(), PreferenceError> {
        store.record_grant(root)
    }

    fn scoped_root(&self, store: &PreferenceStore) -> Option<ScopedRoot> {
        store.scoped_root()
    }

    fn read_artwork(&self, file: &Path) -> io::Result<Vec<u8>> {
        fs::read(file)
    }

    fn run_edit(&self, request: EditRequest, root: ScopedRoot) -> Result<EditOutcome, EditError> {
        editor::edit_on_worker(request, root)
    }
}

fn is_directory(argument: &str) -> Result<PathBuf, String> {
    let path = Path::new(argument);

    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(format!(r#"The directory "{argument}" is not found."#))
    }
}

fn is_artwork_file(argument: &str) -> Result<PathBuf, String> {
    let path = Path::new(argument);

    if !path.is_file() {
        return Err(format!(r#"The file "{argument}" is not found."#));
    }

    if ArtworkFormat::from_path(path).is_none() {
        return Err(format!(r#"The format of "{argument}" is not supported."#));
    }

    Ok(path.to_path_buf())
}

fn log_about_starting(setting: &Setting) {
    if setting.search_inside_folders {
        info!("Edits artwork, searching inside folders.");
    } else {
        info!("Edits artwork.");
    }
}

fn edit_artwork_on_runner<T: EditArtworkRunner>(
    setting: &Setting,
    runner: T,
) -> Result<OutputResult, EditArtworkError> {
    log_about_starting(setting);

    let store = PreferenceStore::new(&setting.preference_file);

    if let Some(root) = &setting.grant_root {
        info!("Records the granted root folder.");

        runner
            .record_grant(&store, root)
            .map_err(EditArtworkError::PreferenceFileCannotBeUsed)?;
    }

    let root = runner
        .scoped_root(&store)
        .ok_or(EditArtworkError::NoGrantedRoot)?;

    debug!("Granted root folder: {:?}", root.path());

    let format = ArtworkFormat::from_path(&setting.artwork_file).ok_or_else(|| {
        EditArtworkError::ArtworkFormatIsNotSupported(setting.artwork_file.clone())
    })?;

    let bytes = runner.read_artwork(&setting.artwork_file).map_err(|error| {
        EditArtworkError::ArtworkCannotBeRead(setting.artwork_file.clone(), error)
    })?;

    let request = EditRequest {
        source_path: setting.source_file.clone(),
        artwork: ArtworkSpec {
            bytes,
            format,
            description: setting.description.clone(),
            size: setting.size,
        },
        search_inside_folders: setting.search_inside_folders,
    };

    let result = runner
        .run_edit(request, root)
        .map_err(EditArtworkError::EditingIsFailed)?;

    info!("Completed.");

    Ok(OutputResult {
        edited_file: result.edited_file,
        written_bytes: result.written_bytes,
    })
}

/// Edits the embedded artwork of an audio file.
///
/// The target is resolved by name inside the previously granted root folder,
/// the artwork is replaced on a temporary copy, and the copy's content is
/// written back to the resolved file.
pub fn edit_artwork(setting: &Setting) -> Result<OutputResult, EditArtworkError> {
    edit_artwork_on_runner(setting, EditArtwork)
}
