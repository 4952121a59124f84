// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Freshness tracking for merge requests.
//!
//! A merge request is *fresh* when it was first registered less than 24
//! hours ago and the user has not viewed it yet. [`FreshnessTracker`] keeps
//! one [`TrackingRecord`] per merge request identity, mirrors the whole map
//! to a [`KeyValueStore`] slot after every mutation, and evicts records
//! older than 30 days on [`cleanup`](FreshnessTracker::cleanup).
//!
//! None of the operations fail from the caller's point of view. Storage
//! problems are logged and absorbed; the in-memory map stays authoritative
//! and [`flush`](FreshnessTracker::flush) retries an unsaved write.

use chrono::{DateTime, Utc};
use std::collections::btree_map::Entry;

use crate::clock::{ClockSource, SystemClock};
use crate::codec::{self, TrackingMap};
use crate::error::Result;
use crate::mr::{MergeRequestIdentity, TrackingKey};
use crate::record::{RecordState, TrackingRecord};
use crate::store::KeyValueStore;

/// Store slot holding the serialized tracking map.
pub const STORAGE_SLOT: &str = "mrUpdateStorage";

/// Tracks which merge requests are new to the user.
pub struct FreshnessTracker<S: KeyValueStore, C: ClockSource = SystemClock> {
    store: S,
    clock: C,
    records: TrackingMap,
    unsaved: bool,
}

impl<S: KeyValueStore> FreshnessTracker<S, SystemClock> {
    /// Loads the tracking map from `store` using the system clock.
    pub fn load(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: ClockSource> FreshnessTracker<S, C> {
    /// Loads the tracking map from `store` with a custom clock source.
    ///
    /// An empty slot starts an empty map. So does a slot that cannot be read
    /// or decoded; the failure is logged and the next write replaces it.
    pub fn with_clock(store: S, clock: C) -> Self {
        let records = match read_map(&store) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("discarding unreadable freshness state: {}", e);
                TrackingMap::new()
            }
        };
        tracing::debug!(records = records.len(), "freshness state loaded");
        FreshnessTracker {
            store,
            clock,
            records,
            unsaved: false,
        }
    }

    /// Current time according to the tracker's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Returns true if `mr` is registered, unviewed, and first seen less
    /// than 24 hours ago.
    pub fn is_fresh(&self, mr: &impl MergeRequestIdentity) -> bool {
        let now = self.clock.now();
        self.records
            .get(&mr.tracking_key())
            .is_some_and(|record| record.is_fresh(now))
    }

    /// Counts the fresh merge requests in `mrs`.
    pub fn count_fresh<I>(&self, mrs: I) -> usize
    where
        I: IntoIterator,
        I::Item: MergeRequestIdentity,
    {
        let now = self.clock.now();
        mrs.into_iter()
            .filter(|mr| {
                self.records
                    .get(&mr.tracking_key())
                    .is_some_and(|record| record.is_fresh(now))
            })
            .count()
    }

    /// Lifecycle state of `mr` right now.
    pub fn state(&self, mr: &impl MergeRequestIdentity) -> RecordState {
        match self.records.get(&mr.tracking_key()) {
            Some(record) => record.state(self.clock.now()),
            None => RecordState::Absent,
        }
    }

    /// A copy of the record for `mr`, if one exists.
    pub fn get(&self, mr: &impl MergeRequestIdentity) -> Option<TrackingRecord> {
        self.records.get(&mr.tracking_key()).cloned()
    }

    /// Records the first sighting of `mr`.
    ///
    /// Returns true if a record was created. An already known merge request,
    /// viewed or not, is left untouched and false is returned.
    pub fn register(&mut self, mr: &impl MergeRequestIdentity) -> bool {
        let now = self.clock.now();
        if !self.insert_new(mr.tracking_key(), now) {
            return false;
        }
        self.persist();
        true
    }

    /// Registers every merge request in `mrs`, persisting once.
    ///
    /// Returns how many records were created.
    pub fn register_all<I>(&mut self, mrs: I) -> usize
    where
        I: IntoIterator,
        I::Item: MergeRequestIdentity,
    {
        let now = self.clock.now();
        let created = mrs
            .into_iter()
            .filter(|mr| self.insert_new(mr.tracking_key(), now))
            .count();
        if created > 0 {
            self.persist();
        }
        created
    }

    /// Marks `mr` as viewed. Unknown merge requests are ignored.
    pub fn mark_viewed(&mut self, mr: &impl MergeRequestIdentity) {
        let key = mr.tracking_key();
        let Some(record) = self.records.get_mut(&key) else {
            tracing::debug!(%key, "view of untracked merge request ignored");
            return;
        };
        if record.viewed {
            return;
        }
        record.viewed = true;
        tracing::debug!(%key, "merge request viewed");
        self.persist();
    }

    /// Evicts expired records as of the tracker's clock.
    ///
    /// Returns the number of records removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now();
        self.cleanup_at(now)
    }

    /// Evicts every record first seen 30 days or more before `now`, along
    /// with records whose first-seen time is missing or unparseable.
    ///
    /// Returns the number of records removed.
    pub fn cleanup_at(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.records.len();
        self.records.retain(|key, record| {
            let expired = record.is_expired(now);
            if expired {
                tracing::debug!(%key, "evicting expired record");
            }
            !expired
        });
        let removed = before - self.records.len();
        if removed > 0 {
            tracing::info!(removed, remaining = self.records.len(), "cleanup");
            self.persist();
        }
        removed
    }

    /// Iterates all records in key order.
    pub fn records(&self) -> impl Iterator<Item = (&TrackingKey, &TrackingRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the last write-through failed and has not been retried.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Retries a failed write-through, surfacing the error.
    pub fn flush(&mut self) -> Result<()> {
        if self.unsaved {
            self.try_persist()?;
        }
        Ok(())
    }

    /// Writes the full map to the store slot.
    pub fn try_persist(&mut self) -> Result<()> {
        let json = codec::encode(&self.records)?;
        self.store.set(STORAGE_SLOT, &json)?;
        self.unsaved = false;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn insert_new(&mut self, key: TrackingKey, now: DateTime<Utc>) -> bool {
        match self.records.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                tracing::debug!(key = %slot.key(), "merge request registered");
                slot.insert(TrackingRecord::new(now));
                true
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("failed to persist freshness state: {}", e);
            self.unsaved = true;
        }
    }
}

fn read_map<S: KeyValueStore>(store: &S) -> Result<TrackingMap> {
    match store.get(STORAGE_SLOT)? {
        Some(json) => codec::decode(&json),
        None => Ok(TrackingMap::new()),
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
