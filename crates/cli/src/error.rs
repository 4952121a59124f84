// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mrfresh CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid merge request reference: '{0}'\n  hint: use <project>!<iid> or <project>_<iid>, e.g. 42!7")]
    InvalidReference(String),

    #[error("invalid merge request input: {0}\n  hint: expected a JSON array like [{{\"project\":{{\"id\":42}},\"iid\":7}}]")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mrfresh operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<mrf_core::Error> for Error {
    fn from(e: mrf_core::Error) -> Self {
        match e {
            mrf_core::Error::InvalidReference(s) => Error::InvalidReference(s),
            mrf_core::Error::Database(e) => Error::Database(e),
            mrf_core::Error::Io(e) => Error::Io(e),
            mrf_core::Error::Json(e) => Error::Json(e),
            mrf_core::Error::Store(s) => Error::Storage(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
