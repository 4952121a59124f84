// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    simple = { 42, 7, "42_7" },
    zero = { 0, 0, "0_0" },
    large = { 123456789, 98765, "123456789_98765" },
    negative = { -1, 3, "-1_3" },
)]
fn derive_key_format(project: i64, iid: i64, expected: &str) {
    assert_eq!(TrackingKey::derive(project, iid).as_str(), expected);
}

#[test]
fn derive_key_is_stable() {
    assert_eq!(TrackingKey::derive(42, 7), TrackingKey::derive(42, 7));
    assert_eq!(TrackingKey::derive(42, 7).to_string(), "42_7");
}

#[parameterized(
    swapped = { (42, 7), (7, 42) },
    different_iid = { (42, 7), (42, 8) },
    different_project = { (1, 7), (2, 7) },
)]
fn derive_key_distinguishes_identities(a: (i64, i64), b: (i64, i64)) {
    assert_ne!(TrackingKey::derive(a.0, a.1), TrackingKey::derive(b.0, b.1));
}

#[test]
fn tracking_key_from_identity() {
    let mr = MrRef::new(5, 11);
    assert_eq!(mr.tracking_key(), TrackingKey::derive(5, 11));
    assert_eq!((&mr).tracking_key(), TrackingKey::derive(5, 11));
}

#[parameterized(
    bang = { "42!7", 42, 7 },
    underscore = { "42_7", 42, 7 },
    spaced = { " 42 ! 7 ", 42, 7 },
)]
fn mr_ref_parse(input: &str, project: i64, iid: i64) {
    assert_eq!(input.parse::<MrRef>().unwrap(), MrRef::new(project, iid));
}

#[parameterized(
    empty = { "" },
    no_separator = { "427" },
    bad_project = { "abc!7" },
    bad_iid = { "42!x" },
    missing_iid = { "42!" },
)]
fn mr_ref_parse_errors(input: &str) {
    let err = input.parse::<MrRef>().unwrap_err();
    assert!(matches!(err, Error::InvalidReference(_)));
}

#[test]
fn mr_ref_display_roundtrip() {
    let mr = MrRef::new(9, 120);
    assert_eq!(mr.to_string(), "9!120");
    assert_eq!(mr.to_string().parse::<MrRef>().unwrap(), mr);
}

#[test]
fn merge_request_from_minimal_json() {
    let mr: MergeRequest = serde_json::from_str(r#"{"project":{"id":3},"iid":14}"#).unwrap();
    assert_eq!(mr.project_id(), 3);
    assert_eq!(mr.iid(), 14);
    assert_eq!(mr.tracking_key().as_str(), "3_14");
}

#[test]
fn merge_request_ignores_unknown_fields() {
    let json = r#"{
        "project": {"id": 3, "name": "api", "url": "https://git.example/api"},
        "iid": 14,
        "author": {"username": "someone"},
        "approvedBy": [],
        "description": "fix the thing"
    }"#;
    let mr: MergeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(mr.project.name, "api");
    assert_eq!(mr.description, "fix the thing");
    assert_eq!(mr.tracking_key().as_str(), "3_14");
}

#[test]
fn tracking_key_serializes_as_plain_string() {
    let key = TrackingKey::derive(1, 2);
    assert_eq!(serde_json::to_string(&key).unwrap(), r#""1_2""#);
    let back: TrackingKey = serde_json::from_str(r#""1_2""#).unwrap();
    assert_eq!(back, key);
}
