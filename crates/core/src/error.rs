// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mrf-core operations.

use thiserror::Error;

/// All possible errors that can occur in mrf-core operations.
///
/// The freshness tracker itself never returns these to its callers; they
/// surface from the store backends and the codec.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("invalid merge request reference: '{0}'\n  hint: use <project>!<iid> or <project>_<iid>, e.g. 42!7")]
    InvalidReference(String),
}

/// A specialized Result type for mrf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
