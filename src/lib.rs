#![warn(missing_docs)]

//! # Gitwatch - Poll-Based Git Auto-Commit Watcher
//!
//! Gitwatch keeps a working directory committed by polling `git status` on a
//! fixed cadence and committing whatever it finds with a timestamped message.
//! Git itself is treated as an opaque external command; gitwatch only
//! interprets exit codes and output text.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line argument definitions
//! - [`config`]: Immutable process-wide configuration record
//! - [`git`]: The `VersionControl` capability trait and the real git client
//! - [`output`]: Console output formatting and verbosity control
//! - [`shutdown`]: Signal handling and the cancellable interval wait
//! - [`watcher`]: The probe/commit/sleep loop
//!
//! ## Example
//!
//! ```no_run
//! use gitwatch::config::WatchConfig;
//! use gitwatch::git::GitClient;
//! use gitwatch::shutdown::Shutdown;
//! use gitwatch::watcher::Watcher;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = WatchConfig::new(Some("/home/user/notes".into()), 30, Vec::new())?;
//! let client = GitClient::new(config.watch_dir.clone());
//! let shutdown = Shutdown::install_handlers()?;
//! Watcher::new(&config, client, shutdown).run()?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration record construction and validation.
pub mod config;

/// Version control invocation: capability trait, git client, error taxonomy.
pub mod git;

/// Output formatting and verbosity control.
pub mod output;

/// Shutdown signal handling and the cancellable interval wait.
pub mod shutdown;

/// The watch loop orchestrating probe, commit, and sleep.
pub mod watcher;

/// Current version of the gitwatch binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of seconds between status probes.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Prefix of every generated commit message.
pub const COMMIT_MESSAGE_PREFIX: &str = "Auto commit";

/// Timestamp format used in generated commit messages (local wall-clock).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
