//! Integration tests for add, list, map, show, remove and reset

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::{init_tracker, wtrack_in};

fn stored(root: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(root.join(".wtrack/storage/workouts.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn add_run(root: &Path, at: &str) {
    wtrack_in(root)
        .args(["add", "running", "--at", at])
        .args(["--distance", "5", "--duration", "25", "--cadence", "180"])
        .assert()
        .success();
}

fn add_ride(root: &Path, at: &str) {
    wtrack_in(root)
        .args(["add", "cycling", "--at", at])
        .args(["--distance", "20", "--duration", "60", "--elevation", "150"])
        .assert()
        .success();
}

#[test]
fn test_add_running() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    wtrack_in(temp.path())
        .args(["add", "running", "--at", "39,-12"])
        .args(["--distance", "5", "--duration", "25", "--cadence", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running on"))
        .stdout(predicate::str::contains("5.0 min/km"));

    let workouts = stored(temp.path());
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["type"], "running");
    assert_eq!(workouts[0]["pace"], 5.0);
    assert_eq!(workouts[0]["coords"], serde_json::json!([39.0, -12.0]));
}

#[test]
fn test_add_cycling() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    add_ride(temp.path(), "39,-12");

    let workouts = stored(temp.path());
    assert_eq!(workouts[0]["type"], "cycling");
    assert_eq!(workouts[0]["speed"], 20.0);
    assert_eq!(workouts[0]["elevationGain"], 150.0);
}

#[test]
fn test_add_negative_distance_rejected() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "39,-12");

    wtrack_in(temp.path())
        .args(["add", "running", "--at", "39,-12"])
        .args(["--distance", "-3", "--duration", "25", "--cadence", "180"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Inputs have to be positive numbers !"));

    assert_eq!(stored(temp.path()).len(), 1);
}

#[test]
fn test_add_unknown_type_rejected() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    wtrack_in(temp.path())
        .args(["add", "swimming", "--at", "39,-12", "--distance", "1", "--duration", "30"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid workout type"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    wtrack_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts recorded"));
}

#[test]
fn test_list_in_insertion_order() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");
    add_ride(temp.path(), "2,2");

    let output = wtrack_in(temp.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let run_at = stdout.find("Running on").unwrap();
    let ride_at = stdout.find("Cycling on").unwrap();
    assert!(run_at < ride_at);
}

#[test]
fn test_list_with_corrupt_storage() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    fs::create_dir_all(temp.path().join(".wtrack/storage")).unwrap();
    fs::write(temp.path().join(".wtrack/storage/workouts.json"), "{oops").unwrap();

    wtrack_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts recorded"));
}

#[test]
fn test_map_shows_markers() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");
    add_ride(temp.path(), "2,2");

    wtrack_in(temp.path())
        .env("WTRACK_POSITION", "51.5,-0.12")
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("Map centered on 51.50000, -0.12000 (zoom 13)"))
        .stdout(predicate::str::contains("🏃‍♂️ Running on"))
        .stdout(predicate::str::contains("🚴‍♂️ Cycling on"));
}

#[test]
fn test_map_without_position_fails_but_list_works() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");

    wtrack_in(temp.path())
        .arg("map")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unable to get your current location"));

    wtrack_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running on"));
}

#[test]
fn test_show_centers_on_workout() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "39,-12");
    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();

    wtrack_in(temp.path())
        .env("WTRACK_POSITION", "51.5,-0.12")
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Map centered on 39.00000, -12.00000"));
}

#[test]
fn test_show_without_position_fails() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "39,-12");
    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();

    wtrack_in(temp.path()).args(["show", &id]).assert().code(5);
}

#[test]
fn test_remove_workout() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");
    add_ride(temp.path(), "2,2");
    add_run(temp.path(), "3,3");

    let before = stored(temp.path());
    let id = before[1]["id"].as_str().unwrap().to_string();

    wtrack_in(temp.path())
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Cycling on"));

    let after = stored(temp.path());
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[test]
fn test_remove_unknown_workout() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");
    let before = stored(temp.path());

    wtrack_in(temp.path())
        .args(["remove", "no-such-id"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No workout with id 'no-such-id'"));

    assert_eq!(stored(temp.path()), before);
}

#[test]
fn test_reset_twice() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "1,1");

    for _ in 0..2 {
        wtrack_in(temp.path())
            .arg("reset")
            .assert()
            .success()
            .stdout(predicate::str::contains("All workouts deleted"));

        wtrack_in(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No workouts recorded"));
    }

    assert!(!temp.path().join(".wtrack/storage/workouts.json").exists());
}

#[test]
fn test_show_with_malformed_position_reports_it() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_run(temp.path(), "39,-12");
    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();

    wtrack_in(temp.path())
        .env("WTRACK_POSITION", "somewhere")
        .args(["show", &id])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WTRACK_POSITION: Invalid coordinates"))
        .stderr(predicate::str::contains("Map is not loaded").not());
}
