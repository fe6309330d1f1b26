use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_grid(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("grid.csv");
    fs::write(&path, "Tenor,0,1,2,3\n2,0.1,0.1,0.1,0.1\n").unwrap();
    path
}

#[test]
fn non_interactive_run_prints_and_exports() {
    let dir = tempdir().unwrap();
    let grid = write_grid(dir.path());

    Command::cargo_bin("ladder")
        .unwrap()
        .args([
            grid.to_str().unwrap(),
            "--k",
            "3",
            "--export-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("21.00%"));

    assert!(dir.path().join("bond_results.csv").exists());
}

#[test]
fn verbose_actions_flag_changes_rendering() {
    let dir = tempdir().unwrap();
    let grid = write_grid(dir.path());

    Command::cargo_bin("ladder")
        .unwrap()
        .args([
            grid.to_str().unwrap(),
            "--k",
            "1",
            "--export-dir",
            dir.path().to_str().unwrap(),
            "--verbose-actions",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("bond_results.csv")).unwrap();
    assert!(content.contains("buy 2-month bond"));
}

#[test]
fn rejects_spreadsheet_extension_non_interactively() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("grid.xlsx");
    fs::write(&bad, "not really a spreadsheet").unwrap();

    Command::cargo_bin("ladder")
        .unwrap()
        .args([bad.to_str().unwrap(), "--k", "1"])
        .assert()
        .failure();
}
