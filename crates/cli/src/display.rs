// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for tracking records.

use chrono::{DateTime, SecondsFormat, Utc};
use mrf_core::{FirstSeen, RecordState, TrackingKey, TrackingRecord};
use serde::Serialize;

/// JSON view of one tracked merge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub key: String,
    pub state: RecordState,
    pub fresh: bool,
    pub viewed: bool,
    pub first_seen: Option<String>,
}

impl RecordView {
    pub fn new(key: &TrackingKey, record: Option<&TrackingRecord>, now: DateTime<Utc>) -> Self {
        match record {
            Some(record) => RecordView {
                key: key.to_string(),
                state: record.state(now),
                fresh: record.is_fresh(now),
                viewed: record.viewed,
                first_seen: record.first_seen.as_ref().map(first_seen_text),
            },
            None => RecordView {
                key: key.to_string(),
                state: RecordState::Absent,
                fresh: false,
                viewed: false,
                first_seen: None,
            },
        }
    }
}

/// Renders a stored first-seen value, normalized when it parses.
fn first_seen_text(first_seen: &FirstSeen) -> String {
    match first_seen.parse() {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => match first_seen {
            FirstSeen::Text(raw) => raw.clone(),
            FirstSeen::EpochMillis(ms) => ms.to_string(),
            FirstSeen::Invalid(value) => value.to_string(),
        },
    }
}

/// Formats a record as a single aligned line: `key  state  first-seen`.
pub fn format_record(view: &RecordView) -> String {
    format!(
        "{:<16} {:<7} {}",
        view.key,
        view.state.as_str(),
        view.first_seen.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
