//! The watch loop: probe the working tree, commit pending changes, sleep.
//!
//! Each cycle runs probe → (stage + commit when dirty) → sleep. Probe and
//! commit failures are logged and ride out to the next cycle; only an
//! unclassified error escapes `run` and terminates the process. The loop is
//! generic over [`VersionControl`] so tests drive it with a scripted fake.

use crate::config::WatchConfig;
use crate::git::errors::GitError;
use crate::git::{CommitOutcome, VersionControl};
use crate::output;
use crate::shutdown::Shutdown;
use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::debug;

/// What one probe/commit cycle amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The probe found a clean tree; nothing was staged or committed.
    Clean,
    /// A commit was created with the contained message.
    Committed(String),
    /// The commit was attempted and failed; the detail is already logged.
    CommitFailed(String),
    /// The probe itself failed; no commit was attempted.
    ProbeFailed(String),
}

/// Owns the timing cadence and orchestrates probe, commit, and sleep.
pub struct Watcher<'a, V> {
    config: &'a WatchConfig,
    vcs: V,
    shutdown: Shutdown,
}

impl<'a, V: VersionControl> Watcher<'a, V> {
    /// Create a watcher over `config`, driving `vcs` each cycle.
    pub fn new(config: &'a WatchConfig, vcs: V, shutdown: Shutdown) -> Self {
        Self {
            config,
            vcs,
            shutdown,
        }
    }

    /// Run cycles until shutdown is requested.
    ///
    /// Returns `Ok(())` on interrupt-driven termination.
    ///
    /// # Errors
    ///
    /// Propagates any error the per-cycle handling does not classify as a
    /// probe or commit failure; the caller treats that as fatal.
    pub fn run(&self) -> Result<()> {
        self.print_banner();

        loop {
            if self.shutdown.is_triggered() {
                break;
            }

            let outcome = self.cycle()?;
            debug!(?outcome, "Cycle finished");

            // Sleep the full interval no matter how the cycle went; only a
            // shutdown request cuts the wait short.
            if !self.shutdown.wait(self.config.interval) {
                break;
            }
        }

        output::tick_end();
        output::info("Stopping auto-commit watch");
        Ok(())
    }

    /// One probe-and-maybe-commit cycle.
    fn cycle(&self) -> Result<CycleOutcome> {
        let snapshot = match self.vcs.status() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                output::tick_end();
                output::warning(&format!("Status probe failed: {err:#}"));
                return Ok(CycleOutcome::ProbeFailed(format!("{err:#}")));
            }
        };

        if snapshot.is_empty() {
            output::tick();
            return Ok(CycleOutcome::Clean);
        }

        output::tick_end();
        output::action("Detected", "uncommitted changes:");
        for line in snapshot.lines() {
            output::info(&format!("  {line}"));
        }

        Ok(self.commit_changes())
    }

    /// Stage everything and attempt one commit.
    fn commit_changes(&self) -> CycleOutcome {
        if let Err(err) = self.vcs.stage_all() {
            // Staging is best-effort; a real problem resurfaces as a commit
            // rejection immediately below.
            debug!(error = %format!("{err:#}"), "Staging failed");
        }

        let message = commit_message(Local::now());

        match self.vcs.commit(&message) {
            Ok(CommitOutcome::Created) => {
                output::success(&format!("Committed: {message}"));
                CycleOutcome::Committed(message)
            }
            Ok(CommitOutcome::Rejected { detail }) => {
                let error = GitError::from_stderr("git commit", &detail);
                output::warning(&format!("Commit failed ({}): {error}", error.error_type()));
                if error.is_transient() {
                    output::verbose("The next cycle re-probes and retries if changes remain");
                }
                CycleOutcome::CommitFailed(detail)
            }
            Err(err) => {
                output::warning(&format!("Commit failed: {err:#}"));
                CycleOutcome::CommitFailed(format!("{err:#}"))
            }
        }
    }

    /// Startup banner: watched directory, cadence, ignore list.
    fn print_banner(&self) {
        output::action("Watching", &self.config.watch_dir.display().to_string());
        output::info(&format!(
            "Poll interval: {}",
            humantime::format_duration(self.config.interval)
        ));
        if !self.config.ignore_patterns.is_empty() {
            output::info(&format!(
                "Ignore patterns (handled by git's own exclusion rules): {}",
                self.config.ignore_patterns.join(", ")
            ));
        }
        output::info("Press Ctrl+C to stop");
    }
}

/// Commit message for a commit created at `now`.
#[must_use]
pub fn commit_message(now: DateTime<Local>) -> String {
    format!(
        "{}: {}",
        crate::COMMIT_MESSAGE_PREFIX,
        now.format(crate::TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_commit_message_format() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(commit_message(now), "Auto commit: 2024-01-15 10:30:00");
    }

    #[test]
    fn test_commit_message_pads_components() {
        let now = Local.with_ymd_and_hms(2024, 6, 3, 7, 5, 9).unwrap();
        assert_eq!(commit_message(now), "Auto commit: 2024-06-03 07:05:09");
    }
}
