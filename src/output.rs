//! Console output formatting for the gitwatch CLI.
//!
//! Human-facing messages go through these helpers rather than raw prints:
//! - Dimmed colors for routine messages
//! - Bold colors for warnings and errors
//! - A single-character progress tick for clean cycles
//! - Verbosity control (quiet, normal, verbose)
//!
//! Diagnostic events for operators go through `tracing` instead; this module
//! is only the console surface.

use colored::Colorize;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity level for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Suppress informational messages, show only warnings and errors.
    Quiet = 0,
    /// Default verbosity level, show all standard messages.
    Normal = 1,
    /// Show verbose debug messages in addition to standard output.
    Verbose = 2,
}

/// Global verbosity setting (default: Normal).
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Sets the global verbosity level for all output functions.
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// Gets the current global verbosity level.
pub fn get_verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Quiet,
        2 => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

/// Prints a success message in green (respects quiet mode).
pub fn success(message: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    eprintln!("{}", message.green());
}

/// Prints an error message in bold red (always shown).
pub fn error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Prints a warning message in bold yellow (always shown).
pub fn warning(message: &str) {
    eprintln!("{}", message.yellow().bold());
}

/// Prints an informational message in dimmed color (respects quiet mode).
pub fn info(message: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    eprintln!("{}", message.dimmed());
}

/// Prints a verbose debug message (only in verbose mode).
pub fn verbose(message: &str) {
    if get_verbosity() != Verbosity::Verbose {
        return;
    }
    eprintln!("{}", message.dimmed());
}

/// Prints a git-style action message with dimmed verb and normal message.
pub fn action(verb: &str, message: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    eprintln!("{} {}", verb.dimmed().bold(), message);
}

/// Prints a single progress tick without a newline (respects quiet mode).
///
/// Clean cycles emit one tick each so an idle watcher still shows a
/// heartbeat.
pub fn tick() {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    eprint!("{}", ".".dimmed());
    let _ = std::io::stderr().flush();
}

/// Terminates a run of progress ticks with a newline (respects quiet mode).
pub fn tick_end() {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    eprintln!();
}
