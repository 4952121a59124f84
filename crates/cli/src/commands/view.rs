// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore, MrRef};

use crate::error::Result;

use super::{finish, Context};

pub fn run(ctx: &Context, mrs: &[MrRef]) -> Result<()> {
    let mut tracker = ctx.open_tracker()?;
    run_impl(&mut tracker, mrs);
    finish(tracker)
}

/// Marks each merge request viewed. Untracked ones are skipped silently.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    tracker: &mut FreshnessTracker<S, C>,
    mrs: &[MrRef],
) {
    for mr in mrs {
        tracker.mark_viewed(mr);
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
