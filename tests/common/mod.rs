#![allow(dead_code)]

use anyhow::{Result, anyhow};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Scratch git repository fixture for exercising the real client.
pub struct ScratchRepo {
    temp_dir: TempDir,
}

impl ScratchRepo {
    /// Create a fresh repository with a commit identity configured.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        git(temp_dir.path(), &["init"])?;
        git(temp_dir.path(), &["config", "user.email", "gitwatch@localhost"])?;
        git(temp_dir.path(), &["config", "user.name", "Gitwatch"])?;
        Ok(Self { temp_dir })
    }

    /// Path of the working directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Number of commits reachable from HEAD (zero for an unborn branch).
    pub fn commit_count(&self) -> Result<usize> {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.path())
            .output()?;
        if !output.status.success() {
            return Ok(0);
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().parse()?)
    }

    /// Subject line of the HEAD commit.
    pub fn head_subject(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["log", "-1", "--pretty=%s"])
            .current_dir(self.path())
            .output()?;
        if !output.status.success() {
            return Err(anyhow!(
                "git log failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Run a git command in `dir`, failing loudly on a non-zero exit.
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        return Err(anyhow!(
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

/// Whether a usable git binary is on PATH; callers skip quietly otherwise.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
