// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use mrf_core::{ClockSource, FreshnessTracker, KeyValueStore, MergeRequestIdentity, MrRef};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::input::{collect_refs, read_merge_requests};

use super::{finish, Context};

#[derive(Serialize)]
struct Registered {
    mr: String,
    key: String,
    created: bool,
}

pub fn run(
    ctx: &Context,
    mrs: Vec<MrRef>,
    input: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let mut out = std::io::stdout().lock();
    match input {
        // Batch input is registered with a single write.
        Some(path) if mrs.is_empty() && output == OutputFormat::Text => {
            let batch = read_merge_requests(path)?;
            let created = tracker.register_all(&batch);
            writeln!(out, "{} new of {}", created, batch.len())?;
        }
        _ => {
            let refs = collect_refs(mrs, input)?;
            run_impl(&mut tracker, &refs, output, &mut out)?;
        }
    }
    finish(tracker)
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl<S, C, W>(
    tracker: &mut FreshnessTracker<S, C>,
    mrs: &[MrRef],
    output: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: ClockSource,
    W: Write,
{
    let results: Vec<Registered> = mrs
        .iter()
        .map(|mr| Registered {
            mr: mr.to_string(),
            key: mr.tracking_key().to_string(),
            created: tracker.register(mr),
        })
        .collect();

    match output {
        OutputFormat::Text => {
            for r in &results {
                writeln!(out, "{} {}", r.mr, if r.created { "new" } else { "seen" })?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
