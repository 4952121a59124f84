// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use mrf_core::MrRef;
use std::path::PathBuf;

/// Parse a merge request reference such as `42!7` or `42_7`.
fn mr_ref(s: &str) -> Result<MrRef, String> {
    s.parse::<MrRef>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mrf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track which merge requests are new to you")]
#[command(
    long_about = "Track which merge requests are new to you.\n\n\
    A merge request is fresh for 24 hours after it is first registered, until you view it.\n\
    Records are forgotten 30 days after they were first registered."
)]
pub struct Cli {
    /// Directory holding config and freshness state
    #[arg(long = "state-dir", global = true, value_name = "path")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record first sightings of merge requests
    #[command(after_help = "\
Examples:
  mrf register 42!7                 Register one merge request
  mrf register 42!7 42!8 51_3       Register several
  mrf register --input mrs.json     Register every merge request in a JSON array
  fetch-mrs | mrf register -i -     Read the JSON array from stdin")]
    Register {
        /// Merge request references (<project>!<iid>)
        #[arg(value_parser = mr_ref)]
        mrs: Vec<MrRef>,

        /// JSON array of merge requests ("-" for stdin)
        #[arg(long, short = 'i', value_name = "file")]
        input: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Mark merge requests as viewed
    #[command(arg_required_else_help = true)]
    View {
        /// Merge request references (<project>!<iid>)
        #[arg(required = true, value_parser = mr_ref)]
        mrs: Vec<MrRef>,
    },

    /// Show the freshness state of a merge request
    #[command(arg_required_else_help = true)]
    Status {
        /// Merge request reference (<project>!<iid>)
        #[arg(value_parser = mr_ref)]
        mr: MrRef,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Count fresh merge requests
    Count {
        /// Merge request references (<project>!<iid>)
        #[arg(value_parser = mr_ref)]
        mrs: Vec<MrRef>,

        /// JSON array of merge requests ("-" for stdin)
        #[arg(long, short = 'i', value_name = "file")]
        input: Option<PathBuf>,
    },

    /// List tracked merge requests
    List {
        /// Only show fresh merge requests
        #[arg(long)]
        fresh: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Forget records older than 30 days
    Cleanup,
}
