// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall clock access.
//!
//! Freshness and retention are pure functions of "now", so the tracker reads
//! time through [`ClockSource`] and tests substitute a controllable clock.

use chrono::{DateTime, Utc};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource {
    /// Returns the current wall clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation using [`Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// Whole seconds elapsed from `since` to `now`.
///
/// Sub-second remainders are truncated toward zero, so a record first seen
/// 23:59:59.900 ago is 86399 seconds old. Negative when `since` lies in the
/// future (clock moved backwards).
pub fn elapsed_secs(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(since).num_seconds()
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
