// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cleanup;
pub mod count;
pub mod list;
pub mod register;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod view;

use std::path::PathBuf;

use mrf_core::{FileStore, FreshnessTracker, KeyValueStore, SqliteStore};

use crate::config::{Backend, Config};
use crate::error::Result;

/// Tracker over whichever backend the config selects.
pub type Tracker = FreshnessTracker<Box<dyn KeyValueStore>>;

/// Resolved state directory plus its configuration.
pub struct Context {
    pub state_dir: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn new(state_dir: PathBuf, config: Config) -> Self {
        Context { state_dir, config }
    }

    /// Opens the configured store.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        let path = self.config.store_path(&self.state_dir);
        tracing::debug!(backend = ?self.config.backend, path = %path.display(), "opening store");
        let store: Box<dyn KeyValueStore> = match self.config.backend {
            Backend::File => Box::new(FileStore::open(&path)?),
            Backend::Sqlite => Box::new(SqliteStore::open(&path)?),
        };
        Ok(store)
    }

    /// Opens the tracker, sweeping expired records if `cleanup_on_start` is set.
    pub fn open_tracker(&self) -> Result<Tracker> {
        let mut tracker = self.open_tracker_unswept()?;
        if self.config.cleanup_on_start {
            tracker.cleanup();
        }
        Ok(tracker)
    }

    /// Opens the tracker without the startup sweep.
    pub fn open_tracker_unswept(&self) -> Result<Tracker> {
        Ok(FreshnessTracker::load(self.open_store()?))
    }
}

/// Retries any write-through that failed during the command.
pub fn finish(mut tracker: Tracker) -> Result<()> {
    tracker.flush()?;
    Ok(())
}
