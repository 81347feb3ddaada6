//! CLI tests for `roster view`, `roster countries`, `roster browse` and `roster init`.
//!
//! Spawns the roster binary against a temp record source and verifies exit
//! codes and rendered output.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use roster::exit_codes;
use roster::record::Gender;
use roster::test_support::{record, sample_records, users_fixture};

fn roster() -> Command {
    Command::new(env!("CARGO_BIN_EXE_roster"))
}

#[test]
fn view_prints_requested_page() {
    let (temp, path) = users_fixture(&sample_records(25)).expect("fixture");
    let output = roster()
        .current_dir(temp.path())
        .args(["view", "--source"])
        .arg(&path)
        .args(["--page", "3"])
        .output()
        .expect("roster view");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Previous 1 2 [3] (Next)"));
    assert!(stdout.contains("Showing 5 of 25 records (page 3 of 3)"));
}

#[test]
fn view_json_reflects_filter_and_sort() {
    let records = vec![
        record(1, "Ann", 40, Gender::Female, "Ohio"),
        record(2, "Bob", 20, Gender::Male, "Ohio"),
        record(3, "Cat", 30, Gender::Female, "Texas"),
        record(4, "Dee", 25, Gender::Female, "Ohio"),
    ];
    let (temp, path) = users_fixture(&records).expect("fixture");
    let output = roster()
        .current_dir(temp.path())
        .args([
            "view", "--json", "--gender", "female", "--sort", "age", "--sort", "age",
        ])
        .arg("--source")
        .arg(&path)
        .output()
        .expect("roster view");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let ids: Vec<u64> = view["visibleRecords"]
        .as_array()
        .expect("records array")
        .iter()
        .map(|record| record["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(view["totalPages"], 1);
    assert_eq!(
        view["availableCountries"],
        serde_json::json!(["Ohio", "Texas"])
    );
}

#[test]
fn view_with_no_matches_exits_empty() {
    let (temp, path) = users_fixture(&sample_records(5)).expect("fixture");
    let status = roster()
        .current_dir(temp.path())
        .args(["view", "--country", "Atlantis", "--source"])
        .arg(&path)
        .status()
        .expect("roster view");

    assert_eq!(status.code(), Some(exit_codes::EMPTY));
}

#[test]
fn missing_source_shows_empty_table() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = roster()
        .current_dir(temp.path())
        .arg("view")
        .output()
        .expect("roster view");

    assert_eq!(output.status.code(), Some(exit_codes::EMPTY));
    assert!(String::from_utf8_lossy(&output.stdout).contains("(no records)"));
}

#[test]
fn strict_config_fails_on_missing_source() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("roster.toml");
    fs::write(&config, "[source]\nstrict = true\n").expect("config");
    let output = roster()
        .current_dir(temp.path())
        .arg("view")
        .output()
        .expect("roster view");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("users.json"));
}

#[test]
fn page_zero_clamps_to_first_page() {
    let (temp, path) = users_fixture(&sample_records(25)).expect("fixture");
    let output = roster()
        .current_dir(temp.path())
        .args(["view", "--json", "--page", "0", "--source"])
        .arg(&path)
        .output()
        .expect("roster view");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(view["currentPage"], 1);
    assert_eq!(view["visibleRecords"][0]["id"], 1);
}

#[test]
fn invalid_arguments_exit_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    for args in [["view", "--page", "two"], ["view", "--sort", "image"]] {
        let output = roster()
            .current_dir(temp.path())
            .args(args)
            .output()
            .expect("roster view");
        assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    }
}

#[test]
fn init_writes_default_config_and_keeps_existing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("roster.toml");
    let status = roster()
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("roster init");
    assert_eq!(status.code(), Some(exit_codes::OK));
    let written = fs::read_to_string(&config).expect("read config");
    assert!(written.contains("page_size = 10"));

    fs::write(&config, "page_size = 3\n").expect("edit config");
    roster()
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("roster init");
    let kept = fs::read_to_string(&config).expect("read config");
    assert_eq!(kept, "page_size = 3\n");

    roster()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .status()
        .expect("roster init --force");
    let forced = fs::read_to_string(&config).expect("read config");
    assert!(forced.contains("page_size = 10"));
}

#[test]
fn configured_page_size_is_used() {
    let (temp, _path) = users_fixture(&sample_records(25)).expect("fixture");
    fs::write(temp.path().join("roster.toml"), "page_size = 5\n").expect("config");
    let output = roster()
        .current_dir(temp.path())
        .args(["view", "--json"])
        .output()
        .expect("roster view");

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(view["totalPages"], 5);
}

#[test]
fn countries_lists_sentinel_then_first_seen_states() {
    let (temp, path) = users_fixture(&sample_records(8)).expect("fixture");
    let output = roster()
        .current_dir(temp.path())
        .arg("countries")
        .arg("--source")
        .arg(&path)
        .output()
        .expect("roster countries");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines,
        vec!["All", "Texas", "Alabama", "Ohio", "Mississippi"]
    );
}

#[test]
fn browse_reads_actions_from_stdin() {
    let (temp, path) = users_fixture(&sample_records(25)).expect("fixture");
    let mut child = roster()
        .current_dir(temp.path())
        .arg("browse")
        .arg("--source")
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn roster browse");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"page 99\ngender female\nquit\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Previous 1 2 [3] (Next)"));
    assert!(stdout.contains("Filter by Gender: female"));
}
