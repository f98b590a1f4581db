// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Replacement of embedded artwork on a temporary copy of the source.

use std::{fs, io, path::Path};

use lofty::{
    config::WriteOptions,
    file::TaggedFileExt,
    tag::{Tag, TagExt},
};
use tempfile::NamedTempFile;

use crate::{edit_error::EditError, request::ArtworkSpec};

/// Temporary duplicate of a source file, scratch space for the tag mutation.
///
/// The file on disk is removed when this value is dropped, whether the edit
/// succeeded or not. Each request owns exactly one copy.
#[derive(Debug)]
pub struct TempCopy {
    file: NamedTempFile,
    length: u64,
}

impl TempCopy {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Byte length of the copy after the tag was written.
    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(self.path())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(file: NamedTempFile, length: u64) -> Self {
        TempCopy { file, length }
    }
}

/// Produces a copy of `source_file` whose artwork is replaced by `artwork`.
///
/// The copy keeps the extension of the source. Any existing pictures are
/// removed before the new front cover is attached, a file holds at most one
/// artwork field afterwards. A failure while writing the tag is returned as
/// an error, the copy is discarded.
pub fn replace_artwork(source_file: &Path, artwork: &ArtworkSpec) -> Result<TempCopy, EditError> {
    let temporary_file = create_temporary_copy(source_file)?;

    let tagged_file = lofty::read_from_path(source_file).map_err(|error| {
        EditError::UnsupportedFormat {
            cause: error.to_string(),
        }
    })?;

    let mut tag = match tagged_file.primary_tag() {
        Some(tag) => tag.to_owned(),
        None => Tag::new(tagged_file.primary_tag_type()),
    };

    remove_all_pictures(&mut tag);
    tag.push_picture(artwork.to_picture());

    tag.save_to_path(temporary_file.path(), WriteOptions::default())
        .map_err(|error| EditError::TagWriteFailed {
            cause: error.to_string(),
        })?;

    let length = fs::metadata(temporary_file.path())
        .map_err(|error| EditError::IoError { error })?
        .len();

    Ok(TempCopy {
        file: temporary_file,
        length,
    })
}

fn create_temporary_copy(source_file: &Path) -> Result<NamedTempFile, EditError> {
    let suffix = match source_file.extension() {
        Some(extension) => format!(".{}", extension.to_string_lossy()),
        None => String::new(),
    };

    let temporary_file = tempfile::Builder::new()
        .prefix("tmp-media")
        .suffix(&suffix)
        .tempfile()
        .map_err(|error| EditError::CopyError { error })?;

    fs::copy(source_file, temporary_file.path())
        .map_err(|error| EditError::CopyError { error })?;

    Ok(temporary_file)
}

fn remove_all_pictures(tag: &mut Tag) {
    while !tag.pictures().is_empty() {
        tag.remove_picture(0);
    }
}
