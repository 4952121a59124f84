// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore, MergeRequestIdentity, MrRef};

use crate::cli::OutputFormat;
use crate::display::RecordView;
use crate::error::Result;

use super::{finish, Context};

pub fn run(ctx: &Context, mr: MrRef, output: OutputFormat) -> Result<()> {
    let tracker = ctx.open_tracker()?;
    run_impl(&tracker, &mr, output, &mut std::io::stdout().lock())?;
    finish(tracker)
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl<S, C, W>(
    tracker: &FreshnessTracker<S, C>,
    mr: &MrRef,
    output: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: ClockSource,
    W: Write,
{
    let record = tracker.get(mr);
    let view = RecordView::new(&mr.tracking_key(), record.as_ref(), tracker.now());
    match output {
        OutputFormat::Text => writeln!(out, "{}", view.state)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
