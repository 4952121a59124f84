// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mrfresh - command-line front end for merge request freshness tracking.
//!
//! Feeds merge request identities to [`mrf_core::FreshnessTracker`] and
//! prints what it reports. State lives in a per-user state directory:
//!
//! - `config.toml` - [`Config`]
//! - `store.json` or `store.db` - the tracker's key-value store

mod cli;
mod commands;
mod display;
mod input;
mod logging;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{resolve_state_dir, Backend, Config};
pub use error::{Error, Result};

use commands::Context;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let state_dir = resolve_state_dir(cli.state_dir.as_deref());
    let config = Config::load(&state_dir)?;
    logging::setup_logging(&config);
    tracing::debug!(state_dir = %state_dir.display(), "starting");

    let ctx = Context::new(state_dir, config);
    match cli.command {
        Command::Register { mrs, input, output } => {
            commands::register::run(&ctx, mrs, input.as_deref(), output)
        }
        Command::View { mrs } => commands::view::run(&ctx, &mrs),
        Command::Status { mr, output } => commands::status::run(&ctx, mr, output),
        Command::Count { mrs, input } => commands::count::run(&ctx, mrs, input.as_deref()),
        Command::List { fresh, output } => commands::list::run(&ctx, fresh, output),
        Command::Cleanup => commands::cleanup::run(&ctx),
    }
}
