// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore, MrRef};

use crate::error::Result;
use crate::input::collect_refs;

use super::{finish, Context};

pub fn run(ctx: &Context, mrs: Vec<MrRef>, input: Option<&Path>) -> Result<()> {
    let refs = collect_refs(mrs, input)?;
    let tracker = ctx.open_tracker()?;
    run_impl(&tracker, &refs, &mut std::io::stdout().lock())?;
    finish(tracker)
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl<S, C, W>(
    tracker: &FreshnessTracker<S, C>,
    mrs: &[MrRef],
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: ClockSource,
    W: Write,
{
    writeln!(out, "{}", tracker.count_fresh(mrs))?;
    Ok(())
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
