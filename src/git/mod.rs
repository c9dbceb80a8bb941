//! # Git Invocation
//!
//! Gitwatch never inspects a repository itself; everything goes through the
//! `git` binary. This module defines the narrow capability trait the watch
//! loop programs against ([`VersionControl`]) and the real implementation
//! that shells out ([`GitClient`]).
//!
//! All invocations are synchronous and blocking, scoped to the watched
//! directory via `current_dir`, with stdin detached. No timeout is applied:
//! a hung git process stalls the loop, which is an accepted limitation of
//! the polling design.
//!
//! Exit-code interpretation differs per operation:
//! - `status`: launch failure or non-zero exit is an error, distinct from
//!   the clean (empty output) result
//! - `add`: best-effort, the caller decides how much to care
//! - `commit`: non-zero exit is a normal [`CommitOutcome::Rejected`] carrying
//!   the stderr text (nothing staged, hook rejection); only a launch failure
//!   is an `Err`

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Git error categorization and handling
pub mod errors;

/// Result of one commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The commit command exited zero and a commit was created.
    Created,
    /// The commit command exited non-zero; `detail` holds its stderr text.
    Rejected {
        /// Diagnostic text from the commit command's standard error stream.
        detail: String,
    },
}

/// Narrow capability interface over the external version-control tool.
///
/// The watch loop is generic over this trait so tests can drive it with a
/// scripted fake instead of a real repository.
pub trait VersionControl {
    /// Probe the working tree for pending changes.
    ///
    /// Returns the trimmed machine-readable status text: an empty string
    /// signals a clean tree, a non-empty string holds one line per pending
    /// change in whatever order the tool emits them.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be launched or exits non-zero.
    /// A failed probe is never conflated with a clean tree.
    fn status(&self) -> Result<String>;

    /// Stage all additions, modifications, and deletions in the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be launched or exits non-zero.
    fn stage_all(&self) -> Result<()>;

    /// Create a commit with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error only if the tool cannot be launched; a non-zero exit
    /// is reported as [`CommitOutcome::Rejected`].
    fn commit(&self, message: &str) -> Result<CommitOutcome>;
}

/// Invokes the `git` binary against a fixed working directory.
#[derive(Debug, Clone)]
pub struct GitClient {
    /// The watched working directory every command runs in.
    work_dir: PathBuf,
}

impl GitClient {
    /// Create a client scoped to `work_dir`.
    #[must_use]
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    /// The working directory this client operates on.
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Verify that the working directory is inside a git work tree.
    ///
    /// Run once at startup so an unusable directory fails fast with an
    /// actionable message instead of producing a probe failure every cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be launched or the directory is not
    /// part of a work tree.
    pub fn verify_work_tree(&self) -> Result<()> {
        let output = Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .context("Failed to run git rev-parse")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let error = errors::GitError::from_stderr("git rev-parse", &stderr);
            return Err(anyhow!(error.user_message()));
        }

        Ok(())
    }
}

impl VersionControl for GitClient {
    fn status(&self) -> Result<String> {
        debug!(dir = %self.work_dir.display(), "Probing git status");

        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .context("Failed to run git status")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let error = errors::GitError::from_stderr("git status", &stderr);
            return Err(anyhow!(error.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn stage_all(&self) -> Result<()> {
        let output = Command::new("git")
            .args(["add", "-A"])
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .context("Failed to run git add")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Git add failed: {stderr}"));
        }

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<CommitOutcome> {
        debug!(message, "Creating commit");

        let output = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .context("Failed to run git commit")?;

        if output.status.success() {
            Ok(CommitOutcome::Created)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Commit rejections are routine (nothing staged, hook refusal)
            // and reported as data rather than an error.
            let mut detail = stderr.trim().to_string();
            if detail.is_empty() {
                detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            Ok(CommitOutcome::Rejected { detail })
        }
    }
}
