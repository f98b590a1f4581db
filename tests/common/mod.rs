use std::{fs::File, io::Write, path::Path};

use anyhow::Result;
use lofty::{
    config::WriteOptions,
    file::TaggedFileExt,
    picture::Picture,
    tag::{Tag, TagExt},
};

/// A small PNG-looking payload. Tags store the bytes untouched, so a real
/// image is not needed.
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
];

/// Writes a minimal silent PCM WAV file, enough container for a tag
/// round-trip.
pub fn write_test_wav(path: &Path) -> Result<()> {
    const SAMPLE_COUNT: u32 = 800;

    let data_length = SAMPLE_COUNT * 2;
    let mut file = File::create(path)?;

    file.write_all(b"RIFF")?;
    file.write_all(&(36 + data_length).to_le_bytes())?;
    file.write_all(b"WAVE")?;

    file.write_all(b"fmt ")?;
    file.write_all(&16u32.to_le_bytes())?;
    file.write_all(&1u16.to_le_bytes())?;
    file.write_all(&1u16.to_le_bytes())?;
    file.write_all(&8000u32.to_le_bytes())?;
    file.write_all(&16000u32.to_le_bytes())?;
    file.write_all(&2u16.to_le_bytes())?;
    file.write_all(&16u16.to_le_bytes())?;

    file.write_all(b"data")?;
    file.write_all(&data_length.to_le_bytes())?;
    file.write_all(&vec![0u8; data_length as usize])?;

    Ok(())
}

/// All pictures embedded in the file, across every tag.
pub fn read_pictures(path: &Path) -> Result<Vec<Picture>> {
    let tagged_file = lofty::read_from_path(path)?;

    Ok(tagged_file
        .tags()
        .iter()
        .flat_map(|tag| tag.pictures())
        .cloned()
        .collect())
}

/// Embeds `pictures` into the file's primary tag.
#[allow(dead_code)]
pub fn embed_pictures(path: &Path, pictures: &[Picture]) -> Result<()> {
    let tagged_file = lofty::read_from_path(path)?;
    let mut tag = Tag::new(tagged_file.primary_tag_type());

    for picture in pictures {
        tag.push_picture(picture.clone());
    }

    tag.save_to_path(path, WriteOptions::default())?;

    Ok(())
}
