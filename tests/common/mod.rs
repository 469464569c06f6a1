//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a scratch directory holding the given files and subdirectories
pub fn create_fixture_dir(files: &[&str], dirs: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        fs::write(temp_dir.path().join(file), file.as_bytes()).unwrap();
    }
    for dir in dirs {
        fs::create_dir(temp_dir.path().join(dir)).unwrap();
    }
    temp_dir
}

/// Two CamelCase files and one CamelCase subdirectory
pub fn create_photo_fixture() -> TempDir {
    create_fixture_dir(&["MyPhoto.jpg", "TestFile"], &["SubDir"])
}

/// Sorted names of the direct entries of `dir`
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Assert that `dir` contains exactly `expected` (order-independent)
pub fn assert_entries(dir: &Path, expected: &[&str]) {
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(list_names(dir), expected, "Unexpected directory contents");
}

/// Read back a fixture file written by `create_fixture_dir`
pub fn read_content(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}
