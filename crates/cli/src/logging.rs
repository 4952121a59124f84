// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `MRF_LOG`, then the config's `log_level`, then `warn`.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive to use.
pub fn filter_directive(config: &Config) -> String {
    env::log_filter()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Later calls are ignored.
pub fn setup_logging(config: &Config) {
    let directive = filter_directive(config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
