//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_placemaps(store: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_placemaps");
    Command::new(bin)
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("PLACEMAPS_STORE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run placemaps binary")
}

#[test]
fn list_on_fresh_store_reports_empty() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_placemaps(&dir.path().join("UserMaps.json"), &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("No maps saved yet."));
}

#[test]
fn create_then_list_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("UserMaps.json");

    let output = run_placemaps(
        &store,
        &[
            "create",
            "Trip",
            "--marker",
            "1.0,2.0,Cafe,Good coffee",
            "--marker",
            "-33.9,151.2,Harbour,Ferries, lots of them",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("as map #1 with 2 places"));

    let output = run_placemaps(&store, &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trip"));

    let output = run_placemaps(&store, &["show", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("1. Cafe (1, 2)"));
    assert!(stdout.contains("Ferries, lots of them"));
}

#[test]
fn create_without_markers_fails_and_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("UserMaps.json");

    let output = run_placemaps(&store, &["create", "Empty"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("at least one marker"));
    assert!(!store.exists());
}

#[test]
fn corrupt_store_is_reported_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("UserMaps.json");
    std::fs::write(&store, "garbage").unwrap();

    let output = run_placemaps(&store, &["create", "Trip", "--marker", "0,0,A,a"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("corrupt"));
    assert_eq!(std::fs::read_to_string(&store).unwrap(), "garbage");
}

#[test]
fn sample_adds_five_maps() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("UserMaps.json");

    let output = run_placemaps(&store, &["sample"]);
    assert!(output.status.success());

    let output = run_placemaps(&store, &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Restaurants to try"));
    assert_eq!(stdout.lines().count(), 2 + 5);
}

#[test]
fn show_missing_map_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_placemaps(&dir.path().join("UserMaps.json"), &["show", "3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No map #3"));
}

#[test]
fn help_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_placemaps(&dir.path().join("UserMaps.json"), &["create", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--marker"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_placemaps(&dir.path().join("UserMaps.json"), &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
