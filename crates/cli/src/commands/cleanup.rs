// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore};

use crate::error::Result;

use super::{finish, Context};

pub fn run(ctx: &Context) -> Result<()> {
    let mut tracker = ctx.open_tracker_unswept()?;
    run_impl(&mut tracker, &mut std::io::stdout().lock())?;
    finish(tracker)
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl<S, C, W>(tracker: &mut FreshnessTracker<S, C>, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    C: ClockSource,
    W: Write,
{
    let removed = tracker.cleanup();
    writeln!(
        out,
        "removed {} expired record{}, {} remaining",
        removed,
        if removed == 1 { "" } else { "s" },
        tracker.len()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "cleanup_tests.rs"]
mod tests;
