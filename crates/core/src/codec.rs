// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted shape of the tracking map.
//!
//! The map is stored as a JSON array of `[key, record]` pairs rather than a
//! JSON object. Data written by earlier releases uses this shape, so it must
//! not change:
//!
//! ```text
//! [["42_7",{"firstSeen":"2026-03-01T12:00:00.000Z","viewed":false}]]
//! ```

use std::collections::BTreeMap;

use crate::error::Result;
use crate::mr::TrackingKey;
use crate::record::TrackingRecord;

/// The in-memory tracking map, ordered by key.
pub type TrackingMap = BTreeMap<TrackingKey, TrackingRecord>;

/// Serializes the map as an array of `[key, record]` pairs in key order.
pub fn encode(map: &TrackingMap) -> Result<String> {
    let pairs: Vec<(&TrackingKey, &TrackingRecord)> = map.iter().collect();
    Ok(serde_json::to_string(&pairs)?)
}

/// Rebuilds the map from its pair-array form.
///
/// A key that appears more than once keeps its last record. Blank input is
/// an empty map. A record that is not an object is kept without a
/// timestamp, so it is never fresh and the next cleanup evicts it.
pub fn decode(json: &str) -> Result<TrackingMap> {
    if json.trim().is_empty() {
        return Ok(TrackingMap::new());
    }
    let pairs: Vec<(TrackingKey, serde_json::Value)> = serde_json::from_str(json)?;
    Ok(pairs
        .into_iter()
        .map(|(key, value)| {
            let record = serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(key = %key, "damaged tracking record: {}", e);
                TrackingRecord {
                    first_seen: None,
                    viewed: false,
                }
            });
            (key, record)
        })
        .collect())
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
