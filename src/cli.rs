//! Command-line interface definitions for gitwatch.
//!
//! All argument parsing structures live here, using clap's derive macros.
//!
//! Note: Field-level documentation is provided via clap attributes (doc
//! comments double as help text), so we allow missing_docs for this module
//! to avoid redundant documentation.

#![allow(missing_docs)]

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for gitwatch.
#[derive(Parser)]
#[command(
    name = "gitwatch",
    version = crate::VERSION,
    about = "Poll-based git auto-commit watcher",
    long_about = "Watches a git working directory and automatically stages and \
                  commits any pending changes with a timestamped message"
)]
pub struct Cli {
    /// Directory to watch (defaults to the directory containing the executable)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Seconds between status probes
    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = crate::DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Ignore pattern (repeatable; informational only, staging relies on
    /// git's own exclusion rules)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore_patterns: Vec<String>,

    /// Suppress informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
