use super::{DraftStore, FsStore};
use crate::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_load_and_save_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prd.md"), "# Draft\n").unwrap();

    let store = FsStore::new(dir.path(), false);
    assert_eq!(store.load("prd.md").unwrap(), "# Draft\n");

    store.save("prd.md", "# Draft\nmore\n").unwrap();
    assert_eq!(store.load("prd.md").unwrap(), "# Draft\nmore\n");
    assert!(!dir.path().join("prd.md.bak").exists());
}

#[test]
fn test_save_keeps_backup() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prd.md"), "v1").unwrap();

    let store = FsStore::new(dir.path(), true);
    store.save("prd.md", "v2").unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("prd.md")).unwrap(), "v2");
    assert_eq!(fs::read_to_string(dir.path().join("prd.md.bak")).unwrap(), "v1");
}

#[test]
fn test_first_save_has_nothing_to_back_up() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path(), true);
    store.save("new.md", "# New").unwrap();
    assert!(!dir.path().join("new.md.bak").exists());
}

#[test]
fn test_missing_draft_is_not_found() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path(), true);
    match store.load("absent.md") {
        Err(Error::NotFound(id)) => assert_eq!(id, "absent.md"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_backup_path() {
    assert_eq!(
        FsStore::backup_path(Path::new("docs/prd.md")),
        Path::new("docs/prd.md.bak")
    );
}
