// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `mrf status`, `mrf count` and `mrf list` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mrf(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("mrf");
    cmd.arg("--state-dir").arg(temp.path()).env_remove("MRF_LOG");
    cmd
}

#[test]
fn status_of_fresh_merge_request() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "1!2"]).assert().success();
    mrf(&temp)
        .args(["status", "1!2"])
        .assert()
        .success()
        .stdout("fresh\n");
}

#[test]
fn status_json_output() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "1!2"]).assert().success();
    let output = mrf(&temp)
        .args(["status", "1_2", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["key"], "1_2");
    assert_eq!(json["fresh"], true);
}

#[test]
fn count_reads_refs_and_input() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["register", "1!1", "1!2", "1!3"])
        .assert()
        .success();
    mrf(&temp).args(["view", "1!3"]).assert().success();

    mrf(&temp)
        .args(["count", "1!1", "-i", "-"])
        .write_stdin(
            r#"[{"project":{"id":1},"iid":2},{"project":{"id":1},"iid":3},{"project":{"id":2},"iid":1}]"#,
        )
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn list_empty_state() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout("No tracked merge requests\n");
}

#[test]
fn list_shows_records() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "4!1", "4!2"]).assert().success();
    mrf(&temp).args(["view", "4!2"]).assert().success();

    mrf(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4_1").and(predicate::str::contains("viewed")));
    mrf(&temp)
        .args(["list", "--fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4_1").and(predicate::str::contains("4_2").not()));
}

#[test]
fn sqlite_backend_from_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "backend = \"sqlite\"\n").unwrap();

    mrf(&temp).args(["register", "8!8"]).assert().success();
    assert!(temp.path().join("store.db").exists());
    assert!(!temp.path().join("store.json").exists());
    mrf(&temp)
        .args(["status", "8!8"])
        .assert()
        .success()
        .stdout("fresh\n");
}

#[test]
fn corrupt_store_starts_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("store.json"),
        r#"{"mrUpdateStorage":"this is not json"}"#,
    )
    .unwrap();

    mrf(&temp)
        .args(["status", "1!1"])
        .assert()
        .success()
        .stdout("absent\n");
    mrf(&temp)
        .args(["register", "1!1"])
        .assert()
        .success()
        .stdout("1!1 new\n");
}
