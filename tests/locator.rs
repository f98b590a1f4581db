// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{
    ffi::OsStr,
    fs::{self, File},
};

use edit_artwork::{
    edit_error::EditError,
    locator::{self, ScopedRoot},
};
use tempfile::{tempdir, TempDir};
use test_context::{test_context, TestContext};

struct RootContext {
    root: TempDir,
}

impl RootContext {
    fn scoped_root(&self) -> ScopedRoot {
        ScopedRoot::new(self.root.path())
    }
}

impl TestContext for RootContext {
    fn setup() -> Self {
        RootContext {
            root: tempdir().unwrap(),
        }
    }
}

#[test_context(RootContext)]
#[test]
fn file_at_the_root_is_found(context: &mut RootContext) {
    File::create(context.root.path().join("track.mp3")).unwrap();
    File::create(context.root.path().join("other.mp3")).unwrap();

    let resolved = locator::locate(&context.scoped_root(), OsStr::new("track.mp3"), false)
        .unwrap()
        .unwrap();

    assert_eq!(
        context.root.path().join("track.mp3").as_path(),
        resolved.path()
    );
}

#[test_context(RootContext)]
#[test]
fn missing_file_is_not_found(context: &mut RootContext) {
    File::create(context.root.path().join("other.mp3")).unwrap();

    let resolved = locator::locate(&context.scoped_root(), OsStr::new("track.mp3"), true).unwrap();

    assert!(resolved.is_none());
}

// The non-recursive search gives up at the first folder it meets. The file
// exists one level down, it is still not found.
#[test_context(RootContext)]
#[test]
fn nested_file_is_not_found_without_recursive_search(context: &mut RootContext) {
    let folder = context.root.path().join("album");

    fs::create_dir(&folder).unwrap();
    File::create(folder.join("track.mp3")).unwrap();

    let resolved = locator::locate(&context.scoped_root(), OsStr::new("track.mp3"), false).unwrap();

    assert!(resolved.is_none());
}

#[test_context(RootContext)]
#[test]
fn nested_file_is_found_with_recursive_search(context: &mut RootContext) {
    let folder = context.root.path().join("album");

    fs::create_dir(&folder).unwrap();
    File::create(folder.join("track.mp3")).unwrap();

    let resolved = locator::locate(&context.scoped_root(), OsStr::new("track.mp3"), true)
        .unwrap()
        .unwrap();

    assert_eq!(folder.join("track.mp3").as_path(), resolved.path());
}

#[test_context(RootContext)]
#[test]
fn nested_file_is_found_next_to_other_folders(context: &mut RootContext) {
    for sibling in ["a", "b", "z"] {
        fs::create_dir(context.root.path().join(sibling)).unwrap();
    }

    File::create(context.root.path().join("b").join("track.mp3")).unwrap();

    let resolved = locator::locate(&context.scoped_root(), OsStr::new("track.mp3"), true)
        .unwrap()
        .unwrap();

    assert_eq!(
        context.root.path().join("b").join("track.mp3").as_path(),
        resolved.path()
    );
}

#[test]
fn inaccessible_root_is_reported() {
    let directory = tempdir().unwrap();
    let root = ScopedRoot::new(directory.path().join("revoked"));

    let error = locator::locate(&root, OsStr::new("track.mp3"), true).unwrap_err();

    assert!(matches!(error, EditError::RootNotAccessible { .. }));
}
