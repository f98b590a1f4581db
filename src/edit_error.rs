// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error about editing artwork.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Required input ({field}) is missing.")]
    MissingInput { field: &'static str },

    #[error("No root folder has been granted.")]
    NoGrantedRoot,

    #[error("The granted root ({path}) cannot be listed: {error}")]
    RootNotAccessible { path: PathBuf, error: io::Error },

    #[error("{name} was not found under the granted root.")]
    FileNotFound { name: String },

    #[error("The audio container could not be read: {cause}")]
    UnsupportedFormat { cause: String },

    #[error("The tag could not be written: {cause}")]
    TagWriteFailed { cause: String },

    #[error("The source could not be copied: {error}")]
    CopyError { error: io::Error },

    #[error("Write access to {path} was denied.")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error: {error}")]
    IoError { error: io::Error },

    #[error("Unknown error is occured.")]
    Unknown,
}
