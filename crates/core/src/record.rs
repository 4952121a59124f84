// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking records and their lifecycle states.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::clock::elapsed_secs;

/// Seconds a registered, unviewed merge request stays fresh (24 hours).
pub const FRESH_WINDOW_SECS: i64 = 60 * 60 * 24;

/// Seconds a record is retained before cleanup evicts it (30 days).
pub const RETENTION_WINDOW_SECS: i64 = 60 * 60 * 24 * 30;

/// Persisted `firstSeen` value.
///
/// New records always carry an ISO-8601 string. Older data may hold epoch
/// milliseconds, a string that no longer parses, or any other JSON value; the
/// raw value is kept so it round-trips untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FirstSeen {
    EpochMillis(i64),
    Text(String),
    Invalid(serde_json::Value),
}

/// Offset-less layouts read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

impl FirstSeen {
    /// Encodes `at` the way new records are written: `2026-03-01T12:00:00.000Z`.
    pub fn at(at: DateTime<Utc>) -> Self {
        FirstSeen::Text(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Parses the stored value, `None` if it is not a valid point in time.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        match self {
            FirstSeen::EpochMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms),
            FirstSeen::Text(s) => parse_text(s.trim()),
            FirstSeen::Invalid(_) => None,
        }
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Reads `viewed`, treating `null` or any non-boolean as not viewed.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or_default())
}

/// Per merge request tracking state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    /// When the merge request was first registered. `None` only for damaged
    /// persisted data.
    #[serde(default)]
    pub first_seen: Option<FirstSeen>,
    /// Whether the user has acknowledged the merge request.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub viewed: bool,
}

impl TrackingRecord {
    /// A new, unviewed record first seen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        TrackingRecord {
            first_seen: Some(FirstSeen::at(now)),
            viewed: false,
        }
    }

    /// Parsed first-seen time, `None` if missing or unparseable.
    pub fn first_seen_at(&self) -> Option<DateTime<Utc>> {
        self.first_seen.as_ref().and_then(FirstSeen::parse)
    }

    /// Age in whole seconds at `now`, `None` if the timestamp is unusable.
    pub fn age_secs(&self, now: DateTime<Utc>) -> Option<i64> {
        self.first_seen_at().map(|seen| elapsed_secs(seen, now))
    }

    /// Fresh means unviewed and first seen less than [`FRESH_WINDOW_SECS`] ago.
    ///
    /// An unusable timestamp is never fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        if self.viewed {
            return false;
        }
        match self.age_secs(now) {
            Some(age) => age < FRESH_WINDOW_SECS,
            None => false,
        }
    }

    /// Expired means first seen [`RETENTION_WINDOW_SECS`] or more ago.
    ///
    /// An unusable timestamp counts as expired, which is deliberately the
    /// opposite default from [`is_fresh`](Self::is_fresh): such records are
    /// never fresh and are always evicted.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.age_secs(now) {
            Some(age) => age >= RETENTION_WINDOW_SECS,
            None => true,
        }
    }

    /// Lifecycle state of this record at `now`.
    pub fn state(&self, now: DateTime<Utc>) -> RecordState {
        if self.viewed {
            RecordState::Viewed
        } else if self.is_fresh(now) {
            RecordState::FreshUnviewed
        } else {
            RecordState::StaleUnviewed
        }
    }
}

/// Lifecycle state of a tracked merge request.
///
/// `FreshUnviewed` decays into `StaleUnviewed` purely with time; `Viewed` is
/// terminal for freshness. Cleanup takes any state back to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    Absent,
    #[serde(rename = "fresh")]
    FreshUnviewed,
    #[serde(rename = "stale")]
    StaleUnviewed,
    Viewed,
}

impl RecordState {
    /// Returns the string representation used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Absent => "absent",
            RecordState::FreshUnviewed => "fresh",
            RecordState::StaleUnviewed => "stale",
            RecordState::Viewed => "viewed",
        }
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
