// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merge request input from files or stdin.
//!
//! The fetch layer hands over merge requests as a JSON array; only
//! `project.id` and `iid` matter here.

use std::io::Read;
use std::path::Path;

use mrf_core::{MergeRequest, MergeRequestIdentity, MrRef};

use crate::error::{Error, Result};

/// Parses a JSON array of merge requests.
pub fn parse_merge_requests(json: &str) -> Result<Vec<MergeRequest>> {
    serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Reads a JSON array of merge requests from `path`, or stdin for `-`.
pub fn read_merge_requests(path: &Path) -> Result<Vec<MergeRequest>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_merge_requests(&content)
}

/// Combines command-line references with merge requests read from `input`.
pub fn collect_refs(refs: Vec<MrRef>, input: Option<&Path>) -> Result<Vec<MrRef>> {
    let mut all = refs;
    if let Some(path) = input {
        let mrs = read_merge_requests(path)?;
        tracing::debug!(count = mrs.len(), path = %path.display(), "read merge requests");
        all.extend(mrs.iter().map(|mr| MrRef::new(mr.project_id(), mr.iid())));
    }
    Ok(all)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
