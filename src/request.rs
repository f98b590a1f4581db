// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! One artwork edit and its payload.

use std::path::{Path, PathBuf};

use lofty::picture::{MimeType, Picture, PictureType};

use crate::utilities;

/// Image formats accepted for embedded artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
}

impl ArtworkFormat {
    /// Maps the integer code used by host callers.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ArtworkFormat::Jpeg),
            1 => Some(ArtworkFormat::Png),
            2 => Some(ArtworkFormat::Gif),
            3 => Some(ArtworkFormat::Bmp),
            4 => Some(ArtworkFormat::Tiff),
            _ => None,
        }
    }

    /// Guesses the format from a file name.
    pub fn from_path<P: AsRef<Path>>(file: P) -> Option<Self> {
        let file = file.as_ref();

        if utilities::has_extension("jpg", file) || utilities::has_extension("jpeg", file) {
            Some(ArtworkFormat::Jpeg)
        } else if utilities::has_extension("png", file) {
            Some(ArtworkFormat::Png)
        } else if utilities::has_extension("gif", file) {
            Some(ArtworkFormat::Gif)
        } else if utilities::has_extension("bmp", file) {
            Some(ArtworkFormat::Bmp)
        } else if utilities::has_extension("tif", file) || utilities::has_extension("tiff", file) {
            Some(ArtworkFormat::Tiff)
        } else {
            None
        }
    }

    pub(crate) fn mime_type(&self) -> MimeType {
        match self {
            ArtworkFormat::Jpeg => MimeType::Jpeg,
            ArtworkFormat::Png => MimeType::Png,
            ArtworkFormat::Gif => MimeType::Gif,
            ArtworkFormat::Bmp => MimeType::Bmp,
            ArtworkFormat::Tiff => MimeType::Tiff,
        }
    }
}

/// The artwork payload of one edit.
#[derive(Debug, Clone)]
pub struct ArtworkSpec {
    pub bytes: Vec<u8>,

    pub format: ArtworkFormat,

    pub description: String,

    /// Declared edge length of the image, used as both width and height.
    ///
    /// The image data is not inspected. Containers that do not record
    /// dimensions ignore this value.
    pub size: u32,
}

impl ArtworkSpec {
    /// The front cover picture that replaces any existing artwork.
    pub(crate) fn to_picture(&self) -> Picture {
        Picture::new_unchecked(
            PictureType::CoverFront,
            Some(self.format.mime_type()),
            Some(self.description.clone()),
            self.bytes.clone(),
        )
    }
}

/// One request to edit the artwork of an audio file, immutable once built.
///
/// Only the file name of `source_path` is used for resolution. The file is
/// looked up by that name inside the granted root folder.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub source_path: PathBuf,

    pub artwork: ArtworkSpec,

    pub search_inside_folders: bool,
}
