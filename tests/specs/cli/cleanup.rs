// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for record expiry via `mrf cleanup` and the startup sweep.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{Duration, SecondsFormat, Utc};
use tempfile::TempDir;

fn mrf(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("mrf");
    cmd.arg("--state-dir").arg(temp.path()).env_remove("MRF_LOG");
    cmd
}

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Seeds the file store with pair-array data as an earlier release wrote it.
fn seed(temp: &TempDir, pairs: serde_json::Value) {
    let doc = serde_json::json!({ "mrUpdateStorage": pairs.to_string() });
    std::fs::write(temp.path().join("store.json"), doc.to_string()).unwrap();
}

fn seed_mixed(temp: &TempDir) {
    seed(
        temp,
        serde_json::json!([
            ["1_1", {"firstSeen": days_ago(31), "viewed": true}],
            ["1_2", {"firstSeen": days_ago(29), "viewed": false}],
            ["1_3", {"firstSeen": "garbage", "viewed": false}],
            ["1_4", {"viewed": true}],
        ]),
    );
}

#[test]
fn cleanup_removes_expired_and_unparseable() {
    let temp = TempDir::new().unwrap();
    seed_mixed(&temp);

    mrf(&temp)
        .arg("cleanup")
        .assert()
        .success()
        .stdout("removed 3 expired records, 1 remaining\n");
    mrf(&temp)
        .args(["status", "1!2"])
        .assert()
        .success()
        .stdout("stale\n");
    mrf(&temp)
        .args(["status", "1!1"])
        .assert()
        .success()
        .stdout("absent\n");
}

#[test]
fn cleanup_on_empty_state() {
    let temp = TempDir::new().unwrap();
    mrf(&temp)
        .arg("cleanup")
        .assert()
        .success()
        .stdout("removed 0 expired records, 0 remaining\n");
}

#[test]
fn startup_sweep_runs_by_default() {
    let temp = TempDir::new().unwrap();
    seed_mixed(&temp);

    let output = mrf(&temp).args(["list", "-o", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn startup_sweep_can_be_disabled() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "cleanup_on_start = false\n").unwrap();
    seed_mixed(&temp);

    let output = mrf(&temp).args(["list", "-o", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
}
