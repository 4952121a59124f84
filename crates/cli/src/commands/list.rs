// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore, RecordState};

use crate::cli::OutputFormat;
use crate::display::{format_record, RecordView};
use crate::error::Result;

use super::{finish, Context};

pub fn run(ctx: &Context, fresh: bool, output: OutputFormat) -> Result<()> {
    let tracker = ctx.open_tracker()?;
    run_impl(&tracker, fresh, output, &mut std::io::stdout().lock())?;
    finish(tracker)
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl<S, C, W>(
    tracker: &FreshnessTracker<S, C>,
    fresh_only: bool,
    output: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: ClockSource,
    W: Write,
{
    let now = tracker.now();
    let views: Vec<RecordView> = tracker
        .records()
        .map(|(key, record)| RecordView::new(key, Some(record), now))
        .filter(|view| !fresh_only || view.state == RecordState::FreshUnviewed)
        .collect();

    match output {
        OutputFormat::Text => {
            if views.is_empty() {
                writeln!(out, "No tracked merge requests")?;
            }
            for view in &views {
                writeln!(out, "{}", format_record(view))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
