// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mrf-core: freshness tracking for merge requests.
//!
//! Remembers which merge requests the user has already seen, reports the
//! ones that are new, and forgets records after a retention window. The
//! state lives in a single slot of a durable key-value store and is written
//! through on every change.
//!
//! ```rust,ignore
//! use mrf_core::{FileStore, FreshnessTracker, MrRef};
//!
//! let store = FileStore::open(&state_dir.join("store.json"))?;
//! let mut tracker = FreshnessTracker::load(store);
//! tracker.cleanup();
//!
//! let mr = MrRef::new(42, 7);
//! tracker.register(&mr);
//! assert!(tracker.is_fresh(&mr));
//! tracker.mark_viewed(&mr);
//! ```

pub mod clock;
pub mod codec;
pub mod error;
pub mod mr;
pub mod record;
pub mod sqlite;
pub mod store;
pub mod tracker;

pub use clock::{ClockSource, SystemClock};
pub use codec::TrackingMap;
pub use error::{Error, Result};
pub use mr::{MergeRequest, MergeRequestIdentity, MrRef, Project, TrackingKey};
pub use record::{
    FirstSeen, RecordState, TrackingRecord, FRESH_WINDOW_SECS, RETENTION_WINDOW_SECS,
};
pub use sqlite::SqliteStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::{FreshnessTracker, STORAGE_SLOT};
