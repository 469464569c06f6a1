//! Tests for CLI argument parsing and end-to-end runs of the binary

use assert_cmd::Command;
use clap::Parser;
use kebabify::cli::Cli;
use kebabify::rename::CollisionPolicy;
use predicates::prelude::*;
use std::path::PathBuf;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn kebabify() -> Command {
    let mut cmd = Command::cargo_bin("kebabify").unwrap();
    cmd.env_remove("CLICOLOR_FORCE").env_remove("RUST_LOG");
    cmd
}

fn renamed_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.starts_with("Renamed:"))
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["kebabify"]);

    assert!(cli.directory.is_none(), "Directory should be prompted for by default");
    assert!(!cli.dry_run, "Default dry_run should be false");
    assert_eq!(cli.on_collision, CollisionPolicy::Skip);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn test_cli_positional_directory() {
    let cli = Cli::parse_from(["kebabify", "/path/to/photos"]);

    assert_eq!(cli.directory, Some(PathBuf::from("/path/to/photos")));
}

#[test]
fn test_cli_flags() {
    let cli = Cli::parse_from([
        "kebabify",
        "photos",
        "--dry-run",
        "--on-collision",
        "error",
        "-vv",
        "--quiet",
    ]);

    assert!(cli.dry_run);
    assert_eq!(cli.on_collision, CollisionPolicy::Error);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);

    let options = cli.rename_options();
    assert!(options.dry_run);
    assert_eq!(options.on_collision, CollisionPolicy::Error);
}

#[test]
fn test_cli_rejects_unknown_policy() {
    let result = Cli::try_parse_from(["kebabify", "photos", "--on-collision", "rename"]);
    assert!(result.is_err());
}

#[test]
fn test_end_to_end_rename() {
    let temp_dir = create_photo_fixture();

    let output = kebabify().arg(temp_dir.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        renamed_lines(&output.stdout),
        vec![
            "Renamed: MyPhoto.jpg -> my-photo.jpg".to_string(),
            "Renamed: TestFile -> test-file".to_string(),
        ]
    );
    assert_entries(temp_dir.path(), &["my-photo.jpg", "test-file", "SubDir"]);
}

#[test]
fn test_end_to_end_prompted_directory() {
    let temp_dir = create_photo_fixture();

    kebabify()
        .arg("--quiet")
        .write_stdin(format!("{}\n", temp_dir.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter the directory path"))
        .stdout(predicate::str::contains("Renamed: MyPhoto.jpg -> my-photo.jpg"));

    assert_entries(temp_dir.path(), &["my-photo.jpg", "test-file", "SubDir"]);
}

#[test]
fn test_end_to_end_dry_run() {
    let temp_dir = create_photo_fixture();

    let output = kebabify()
        .arg(temp_dir.path())
        .arg("--dry-run")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(renamed_lines(&output.stdout).is_empty());
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("Would rename: TestFile -> test-file"));
    assert_entries(temp_dir.path(), &["MyPhoto.jpg", "TestFile", "SubDir"]);
}

#[test]
fn test_end_to_end_collision_skip() {
    let temp_dir = create_fixture_dir(&["FileA.txt", "File-a.txt"], &[]);

    kebabify()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: File-a.txt -> file-a.txt"))
        .stdout(predicate::str::contains("Skipped: FileA.txt -> file-a.txt"));
}

#[test]
fn test_end_to_end_collision_error() {
    let temp_dir = create_fixture_dir(&["FileA.txt", "File-a.txt"], &[]);

    kebabify()
        .arg(temp_dir.path())
        .args(["--on-collision", "error"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target already exists"));
}

#[test]
fn test_end_to_end_missing_directory() {
    let temp_dir = create_fixture_dir(&[], &[]);

    kebabify()
        .arg(temp_dir.path().join("Nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_end_to_end_empty_prompt_answer() {
    kebabify()
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No directory path given"));
}

#[test]
fn test_stdout_holds_only_rename_records() {
    let temp_dir = create_photo_fixture();

    let output = kebabify().arg(temp_dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Renamed: MyPhoto.jpg -> my-photo.jpg",
            "Renamed: TestFile -> test-file",
        ],
        "Summary and banner belong on stderr"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("RENAME SUMMARY"));
}
