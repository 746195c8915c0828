//! Integration tests for the iaa CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn iaa() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("iaa"))
}

#[test]
fn test_cli_version() {
    iaa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iaa"));
}

#[test]
fn test_cli_help_lists_new() {
    iaa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_new_help_lists_template_flags() {
    iaa()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--advanced"))
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("takes precedence over --advanced"));
}

#[test]
fn test_new_requires_project_name() {
    iaa()
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn test_unreachable_template_fails_without_creating_folder() {
    let work = TempDir::new().expect("temp work dir");
    let missing = work.path().join("no-such-template");

    iaa()
        .current_dir(work.path())
        .args(["new", "example.com/org/demo", "--skip-tool-check", "--repo"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not created"));

    assert!(!work.path().join("demo").exists());
}

#[test]
fn test_yes_replaces_existing_folder_even_when_clone_fails() {
    let work = TempDir::new().expect("temp work dir");
    let existing = work.path().join("demo");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "old project").unwrap();
    let missing = work.path().join("no-such-template");

    iaa()
        .current_dir(work.path())
        .args(["new", "demo", "--yes", "--skip-tool-check", "--repo"])
        .arg(&missing)
        .assert()
        .failure();

    // The old folder is removed before cloning and nothing is rolled back
    assert!(!existing.join("keep.txt").exists());
}
