//! End-to-end tests for the habitrack binary.
//!
//! Each test points `HABITRACK_HOME` at its own temporary directory so the
//! database, config and logs never touch the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn habitrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("habitrack").unwrap();
    cmd.env("HABITRACK_HOME", home.path())
        .env("HABITRACK_USER", "tester")
        .env("NO_COLOR", "1");
    cmd
}

fn json_output(home: &TempDir, args: &[&str]) -> Value {
    let output = habitrack(home)
        .args(args)
        .args(["--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "command failed: {args:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn add_and_list_habit() {
    let home = TempDir::new().unwrap();

    habitrack(&home)
        .args(["add", "Go to shower", "-d", "every morning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created habit: Go to shower (daily)"));

    habitrack(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Go to shower"))
        .stdout(predicate::str::contains("every morning"));

    assert!(home.path().join("habitrack.db").exists());
}

#[test]
fn duplicate_title_fails_with_exit_code_one() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Read"]).assert().success();
    habitrack(&home)
        .args(["add", "READ"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let listed = json_output(&home, &["list"]);
    assert_eq!(listed["count"], 1);
}

#[test]
fn habits_are_scoped_per_user() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Read"]).assert().success();
    habitrack(&home)
        .args(["add", "Read", "--user", "someone-else"])
        .assert()
        .success();

    let mine = json_output(&home, &["list"]);
    assert_eq!(mine["owner"], "tester");
    assert_eq!(mine["count"], 1);
}

#[test]
fn track_twice_keeps_one_record() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    habitrack(&home)
        .args(["track", "Run", "--date", "2024-10-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed Run on 2024-10-19"));
    habitrack(&home)
        .args(["track", "Run", "--date", "2024-10-19", "--completed", "no"])
        .assert()
        .success();

    let records = json_output(&home, &["record", "list", "Run"]);
    assert_eq!(records["count"], 1);
    assert_eq!(records["items"][0]["completed"], false);
}

#[test]
fn track_unknown_habit_is_not_found() {
    let home = TempDir::new().unwrap();

    habitrack(&home)
        .args(["track", "Nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn track_rejects_invalid_date() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    habitrack(&home)
        .args(["track", "Run", "--date", "19/10/2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn streak_counts_today_and_yesterday() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Go to shower"]).assert().success();
    habitrack(&home)
        .args(["track", "Go to shower", "--date", "yesterday"])
        .assert()
        .success();
    habitrack(&home)
        .args(["track", "Go to shower"])
        .assert()
        .success();

    let streak = json_output(&home, &["stats", "streak", "Go to shower"]);
    assert_eq!(streak["current_streak"], 2);
    assert_eq!(streak["longest_streak"], 2);
}

#[test]
fn rate_and_report_over_explicit_range() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Go to shower"]).assert().success();
    for date in ["2024-10-19", "2024-10-20"] {
        habitrack(&home)
            .args(["track", "Go to shower", "--date", date])
            .assert()
            .success();
    }

    let rate = json_output(
        &home,
        &["stats", "rate", "Go to shower", "--from", "2024-10-19", "--to", "2024-10-22"],
    );
    assert_eq!(rate["success_rate"], 50.0);

    habitrack(&home)
        .args([
            "stats", "report", "Go to shower", "--from", "2024-10-19", "--to", "2024-10-22",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress Report for Habit: Go to shower"))
        .stdout(predicate::str::contains("Total days: 4"))
        .stdout(predicate::str::contains("Success rate: 50.00%"));
}

#[test]
fn reversed_range_reports_zero() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    let rate = json_output(
        &home,
        &["stats", "rate", "Run", "--from", "2024-10-22", "--to", "2024-10-19"],
    );
    assert_eq!(rate["success_rate"], 0.0);
}

#[test]
fn record_edit_without_record_changes_nothing() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    habitrack(&home)
        .args([
            "record", "edit", "Run", "--date", "2024-10-19", "--from", "false", "--to", "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No change"));

    let records = json_output(&home, &["record", "list", "Run"]);
    assert_eq!(records["count"], 0);
}

#[test]
fn record_delete_without_record_changes_nothing() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    habitrack(&home)
        .args(["record", "delete", "Run", "--date", "2024-10-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No change for Run on 2024-10-19"));

    let deleted = json_output(&home, &["record", "delete", "Run", "--date", "2024-10-19"]);
    assert_eq!(deleted["deleted"], false);
}

#[test]
fn commands_write_events_to_log_file() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();

    let logs = home.path().join("logs");
    let contents: String = std::fs::read_dir(&logs)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(contents.contains("event=app_start"), "{contents}");
    assert!(contents.contains("event=habit_create"), "{contents}");
}

#[test]
fn delete_habit_removes_its_records() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Run"]).assert().success();
    habitrack(&home)
        .args(["track", "Run", "--date", "2024-10-19"])
        .assert()
        .success();
    habitrack(&home)
        .args(["delete", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted habit: run"));

    habitrack(&home)
        .args(["record", "list", "Run"])
        .assert()
        .code(1);

    habitrack(&home).args(["add", "Run"]).assert().success();
    let records = json_output(&home, &["record", "list", "Run"]);
    assert_eq!(records["count"], 0);
}

#[test]
fn edit_renames_habit() {
    let home = TempDir::new().unwrap();

    habitrack(&home).args(["add", "Read"]).assert().success();
    habitrack(&home)
        .args(["edit", "Read", "--title", "Read more", "-f", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read more"));

    let listed = json_output(&home, &["list"]);
    assert_eq!(listed["items"][0]["title"], "Read more");
    assert_eq!(listed["items"][0]["frequency"], "WEEKLY");
}

#[test]
fn config_sets_default_output() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    habitrack(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn completions_do_not_need_data_directory() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("not-created");

    Command::cargo_bin("habitrack")
        .unwrap()
        .env("HABITRACK_HOME", &missing)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("habitrack"));

    assert!(!missing.exists());
}
