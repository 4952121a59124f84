// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merge request identity and tracking keys.
//!
//! The tracker never looks at a merge request beyond its composite identity
//! `(project id, iid)`. Anything that can report that pair implements
//! [`MergeRequestIdentity`]; [`MergeRequest`] is the shape the fetch layer
//! hands over as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Composite identity of a merge request.
pub trait MergeRequestIdentity {
    /// Numeric id of the project the merge request belongs to.
    fn project_id(&self) -> i64;

    /// Project-scoped internal id of the merge request.
    fn iid(&self) -> i64;

    /// Tracking key derived from this identity.
    fn tracking_key(&self) -> TrackingKey {
        TrackingKey::derive(self.project_id(), self.iid())
    }
}

impl<T: MergeRequestIdentity + ?Sized> MergeRequestIdentity for &T {
    fn project_id(&self) -> i64 {
        (**self).project_id()
    }

    fn iid(&self) -> i64 {
        (**self).iid()
    }
}

/// Stable string key for a merge request: `<projectId>_<iid>`.
///
/// This is the key persisted in the store, so the derivation must never
/// change. Keys read back from storage are kept as-is, even if they do not
/// follow the derivation scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingKey(String);

impl TrackingKey {
    /// Derives the key for a `(project id, iid)` pair.
    pub fn derive(project_id: i64, iid: i64) -> Self {
        TrackingKey(format!("{project_id}_{iid}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackingKey {
    fn from(s: String) -> Self {
        TrackingKey(s)
    }
}

/// A bare `(project, iid)` reference, as typed on the command line.
///
/// Parses `42!7` (GitLab's reference notation) and `42_7` (the tracking key
/// notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MrRef {
    pub project_id: i64,
    pub iid: i64,
}

impl MrRef {
    pub fn new(project_id: i64, iid: i64) -> Self {
        MrRef { project_id, iid }
    }
}

impl MergeRequestIdentity for MrRef {
    fn project_id(&self) -> i64 {
        self.project_id
    }

    fn iid(&self) -> i64 {
        self.iid
    }
}

impl fmt::Display for MrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.project_id, self.iid)
    }
}

impl FromStr for MrRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (project, iid) = s
            .split_once('!')
            .or_else(|| s.split_once('_'))
            .ok_or_else(|| Error::InvalidReference(s.to_string()))?;
        let project_id = project
            .trim()
            .parse()
            .map_err(|_| Error::InvalidReference(s.to_string()))?;
        let iid = iid
            .trim()
            .parse()
            .map_err(|_| Error::InvalidReference(s.to_string()))?;
        Ok(MrRef::new(project_id, iid))
    }
}

/// Project a merge request belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A merge request as delivered by the fetch layer.
///
/// Only `project.id` and `iid` are required; everything else is carried for
/// display and ignored by the tracker. Unknown fields are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    pub project: Project,
    pub iid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl MergeRequestIdentity for MergeRequest {
    fn project_id(&self) -> i64 {
        self.project.id
    }

    fn iid(&self) -> i64 {
        self.iid
    }
}

#[cfg(test)]
#[path = "mr_tests.rs"]
mod tests;
