// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `mrf register` and `mrf view` commands.

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

fn stored_pairs(temp: &TempDir) -> serde_json::Value {
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp.path().join("store.json")).unwrap())
            .unwrap();
    serde_json::from_str(doc["mrUpdateStorage"].as_str().unwrap()).unwrap()
}

#[test]
fn register_then_register_again() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["register", "42!7"])
        .assert()
        .success()
        .stdout("42!7 new\n");
    mrf(&temp)
        .args(["register", "42!7"])
        .assert()
        .success()
        .stdout("42!7 seen\n");
}

#[test]
fn register_persists_pair_array() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "42!7", "3_1"]).assert().success();

    let pairs = stored_pairs(&temp);
    let pairs = pairs.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0][0], "3_1");
    assert_eq!(pairs[1][0], "42_7");
    assert_eq!(pairs[1][1]["viewed"], false);
    assert!(pairs[1][1]["firstSeen"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn register_from_stdin_batch() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["register", "--input", "-"])
        .write_stdin(r#"[{"project":{"id":1},"iid":1},{"project":{"id":1},"iid":2}]"#)
        .assert()
        .success()
        .stdout("2 new of 2\n");
    mrf(&temp)
        .args(["register", "--input", "-"])
        .write_stdin(r#"[{"project":{"id":1},"iid":2},{"project":{"id":1},"iid":3}]"#)
        .assert()
        .success()
        .stdout("1 new of 2\n");
}

#[test]
fn register_rejects_bad_reference() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["register", "not-a-ref"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid merge request reference"));
}

#[test]
fn register_rejects_bad_input() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["register", "-i", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid merge request input"));
}

#[test]
fn view_marks_viewed() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "5!5"]).assert().success();
    mrf(&temp).args(["view", "5!5"]).assert().success();

    assert_eq!(stored_pairs(&temp)[0][1]["viewed"], true);
    mrf(&temp)
        .args(["status", "5!5"])
        .assert()
        .success()
        .stdout("viewed\n");
}

#[test]
fn view_unknown_is_silent() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .args(["view", "9!9"])
        .assert()
        .success()
        .stdout("");
    mrf(&temp)
        .args(["status", "9!9"])
        .assert()
        .success()
        .stdout("absent\n");
}

#[test]
fn viewed_stays_viewed_after_register() {
    let temp = TempDir::new().unwrap();
    mrf(&temp).args(["register", "5!5"]).assert().success();
    mrf(&temp).args(["view", "5!5"]).assert().success();
    mrf(&temp)
        .args(["register", "5!5"])
        .assert()
        .success()
        .stdout("5!5 seen\n");
    mrf(&temp)
        .args(["count", "5!5"])
        .assert()
        .success()
        .stdout("0\n");
}
