//! Process-wide configuration for the watch loop.
//!
//! The configuration is constructed once at startup from CLI arguments and
//! stays immutable for the process lifetime; the loop receives it by
//! reference. There is no configuration file and no environment lookup.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Immutable configuration record for one watch process.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Absolute path of the watched working directory.
    pub watch_dir: PathBuf,

    /// Fixed wait between the end of one cycle and the next probe.
    pub interval: Duration,

    /// Ignore-pattern substrings, shown in the startup banner. These are
    /// informational: the status probe and `git add -A` rely entirely on
    /// git's own exclusion rules, so the list is never applied as a filter.
    pub ignore_patterns: Vec<String>,
}

impl WatchConfig {
    /// Build and validate a configuration record.
    ///
    /// `dir` defaults to the directory containing the running executable and
    /// is canonicalized to an absolute path. An empty `ignore_patterns` list
    /// selects the default set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `interval_secs` is zero
    /// - The watch directory does not exist or cannot be canonicalized
    /// - The watch path is not a directory
    pub fn new(
        dir: Option<PathBuf>,
        interval_secs: u64,
        ignore_patterns: Vec<String>,
    ) -> Result<Self> {
        if interval_secs == 0 {
            bail!("Poll interval must be at least one second");
        }

        let dir = dir.unwrap_or_else(default_watch_dir);
        let watch_dir = dir
            .canonicalize()
            .with_context(|| format!("Watch directory not accessible: {}", dir.display()))?;

        if !watch_dir.is_dir() {
            bail!("Watch path is not a directory: {}", watch_dir.display());
        }

        let ignore_patterns = if ignore_patterns.is_empty() {
            default_ignore_patterns()
        } else {
            ignore_patterns
        };

        Ok(Self {
            watch_dir,
            interval: Duration::from_secs(interval_secs),
            ignore_patterns,
        })
    }
}

/// Directory containing the running executable, falling back to the current
/// directory when the executable path cannot be resolved.
fn default_watch_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default ignore-pattern set.
fn default_ignore_patterns() -> Vec<String> {
    vec![
        ".git".to_string(),
        "__pycache__".to_string(),
        "node_modules".to_string(),
        "*.log".to_string(),
        ".env".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_resolves_absolute_dir() {
        let temp = TempDir::new().unwrap();
        let config = WatchConfig::new(Some(temp.path().to_path_buf()), 30, Vec::new()).unwrap();
        assert!(config.watch_dir.is_absolute());
        assert_eq!(config.interval, Duration::from_secs(30));
    }

    #[test]
    fn test_config_rejects_zero_interval() {
        let temp = TempDir::new().unwrap();
        let result = WatchConfig::new(Some(temp.path().to_path_buf()), 0, Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let result = WatchConfig::new(Some(missing), 30, Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_file_as_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, b"not a directory").unwrap();
        let result = WatchConfig::new(Some(file), 30, Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_ignore_patterns_used_when_empty() {
        let temp = TempDir::new().unwrap();
        let config = WatchConfig::new(Some(temp.path().to_path_buf()), 30, Vec::new()).unwrap();
        assert!(config.ignore_patterns.contains(&".git".to_string()));
        assert!(config.ignore_patterns.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_explicit_ignore_patterns_replace_defaults() {
        let temp = TempDir::new().unwrap();
        let config = WatchConfig::new(
            Some(temp.path().to_path_buf()),
            30,
            vec!["target".to_string()],
        )
        .unwrap();
        assert_eq!(config.ignore_patterns, vec!["target".to_string()]);
    }

    #[test]
    fn test_default_watch_dir_exists() {
        // The executable's directory always exists while the test runs.
        assert!(default_watch_dir().exists());
    }
}
