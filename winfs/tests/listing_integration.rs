//! Integration tests for directory listing against real directories.

mod common;

use std::sync::Arc;

use common::{create_temp_dir, fs_path, write_file_at};
use winfs::{DirectoryLister, Error, FsPath, StdFileSystem};

const BASE: i64 = 1_700_000_000;
const HOUR: i64 = 3600;

fn lister() -> DirectoryLister {
    DirectoryLister::new(Arc::new(StdFileSystem))
}

/// Six files an hour apart, `f1.go` the most recent.
fn six_files() -> tempfile::TempDir {
    let dir = create_temp_dir();
    for (i, name) in ["f1.go", "f2", "f3", "f4.go", "f5.go", "f6"].iter().enumerate() {
        let age = i64::try_from(i).unwrap();
        write_file_at(dir.path(), name, name, BASE - age * HOUR);
    }
    dir
}

fn names(entries: &[winfs::DirectoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_by_date_and_by_name() {
    let dir = six_files();
    let path = fs_path(dir.path());

    let by_date = lister().by_date(&path, "").unwrap();
    assert_eq!(names(&by_date), ["f1.go", "f2", "f3", "f4.go", "f5.go", "f6"]);

    let by_name = lister().by_name(&path, "").unwrap();
    assert_eq!(names(&by_name), ["f1.go", "f2", "f3", "f4.go", "f5.go", "f6"]);
}

#[test]
fn test_pattern_selects_same_set_in_both_orders() {
    let dir = six_files();
    let path = fs_path(dir.path());

    assert_eq!(names(&lister().by_name(&path, "f[236]").unwrap()), ["f2", "f3", "f6"]);
    assert_eq!(names(&lister().by_date(&path, "f[236]").unwrap()), ["f2", "f3", "f6"]);
}

#[test]
fn test_entries_carry_metadata() {
    let dir = create_temp_dir();
    write_file_at(dir.path(), "data.bin", "12345", BASE);
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let entries = lister().by_name(&fs_path(dir.path()), "").unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "data.bin");
    assert_eq!(entries[0].size, 5);
    assert!(!entries[0].is_dir);
    assert!(entries[1].is_dir);
}

#[test]
fn test_last_modified() {
    let dir = six_files();
    let path = fs_path(dir.path());

    assert_eq!(lister().last_modified(&path, "").unwrap().as_deref(), Some("f1.go"));
    assert_eq!(lister().last_modified(&path, "^f[56]").unwrap().as_deref(), Some("f5.go"));
    assert_eq!(lister().last_modified(&path, "nothing").unwrap(), None);
}

#[test]
fn test_empty_and_missing_directories() {
    let dir = create_temp_dir();
    let path = fs_path(dir.path());

    assert!(lister().list_filtered(&path, "").unwrap().is_empty());
    assert!(lister()
        .list_filtered(&path.add("missing"), "")
        .unwrap()
        .is_empty());
}

#[test]
fn test_file_is_not_listed() {
    let dir = create_temp_dir();
    write_file_at(dir.path(), "plain.txt", "x", BASE);

    let file = fs_path(dir.path()).add("plain.txt");
    assert!(lister().list_filtered(&file, "").unwrap().is_empty());
}

#[test]
fn test_invalid_pattern() {
    let dir = six_files();
    let err = lister()
        .list_filtered(&fs_path(dir.path()), "f[")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
}

#[test]
fn test_backslash_spelling_lists_same_directory() {
    let dir = six_files();
    let text = dir.path().to_string_lossy().replace('/', "\\");
    let entries = lister().list_filtered(&FsPath::new(text), "").unwrap();
    assert_eq!(entries.len(), 6);
}
