// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use crate::{edit_error::EditError, locator::ResolvedFile};

/// Overwrites the resolved file with `content` in full.
///
/// The handle is closed on every exit path. There is no retry, a revoked
/// grant or a concurrently removed file surfaces as an error.
pub fn commit(resolved: &ResolvedFile, content: &[u8]) -> Result<(), EditError> {
    write_content(resolved.path(), content).map_err(|error| match error.kind() {
        io::ErrorKind::PermissionDenied => EditError::PermissionDenied {
            path: resolved.path().to_path_buf(),
        },
        io::ErrorKind::NotFound => EditError::FileNotFound {
            name: resolved.path().to_string_lossy().into_owned(),
        },
        _ => EditError::IoError { error },
    })
}

fn write_content(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;

    file.write_all(content)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::locator::ResolvedFile;

    use super::*;

    #[test]
    fn content_is_fully_replaced() {
        let directory = tempdir().unwrap();
        let target = directory.path().join("track.mp3");

        fs::write(&target, b"previous content that is much longer").unwrap();

        let resolved = ResolvedFile::new(target.clone());

        commit(&resolved, b"new").unwrap();

        assert_eq!(b"new".as_slice(), fs::read(&target).unwrap());
    }

    #[test]
    fn removed_file_is_reported() {
        let directory = tempdir().unwrap();
        let resolved = ResolvedFile::new(directory.path().join("missing.mp3"));

        let error = commit(&resolved, b"content").unwrap_err();

        assert!(matches!(error, EditError::FileNotFound { .. }));
    }

    #[test]
    fn other_io_failures_are_reported() {
        let directory = tempdir().unwrap();
        let blocking_file = directory.path().join("blocking");

        fs::write(&blocking_file, b"not a directory").unwrap();

        let resolved = ResolvedFile::new(blocking_file.join("track.mp3"));

        let error = commit(&resolved, b"content").unwrap_err();

        assert!(matches!(
            error,
            EditError::IoError { .. } | EditError::FileNotFound { .. }
        ));
    }
}
