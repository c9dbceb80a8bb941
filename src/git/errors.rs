use std::fmt;

/// Categorized git operation errors with actionable guidance
#[derive(Debug)]
pub enum GitError {
    /// The commit found nothing staged (clean tree or a race with an
    /// external change between probe and commit)
    NothingToCommit(String),
    /// A commit hook refused the commit
    HookRejected(String),
    /// The directory is not inside a git work tree
    NotARepository(String),
    /// The index is locked by another git process
    IndexLocked(String),
    /// File system permission errors
    Permission(String),
    /// Unknown or uncategorized error
    Unknown(String),
}

impl GitError {
    /// Parse git command stderr to categorize the error
    ///
    /// Analyzes common git error patterns to provide better error messages
    /// and actionable guidance to users.
    #[must_use]
    pub fn from_stderr(command: &str, stderr: &str) -> Self {
        let stderr_lower = stderr.to_lowercase();

        // Nothing-to-commit outcomes
        if stderr_lower.contains("nothing to commit")
            || stderr_lower.contains("nothing added to commit")
            || stderr_lower.contains("no changes added to commit")
        {
            return Self::NothingToCommit(format!(
                "{}: Nothing to commit - {}",
                command,
                extract_meaningful_message(stderr)
            ));
        }

        // Hook rejections
        if stderr_lower.contains("hook") {
            return Self::HookRejected(format!(
                "{}: Rejected by hook - {}",
                command,
                extract_meaningful_message(stderr)
            ));
        }

        // Not a repository
        if stderr_lower.contains("not a git repository") {
            return Self::NotARepository(format!(
                "{}: Not a git repository - {}",
                command,
                extract_meaningful_message(stderr)
            ));
        }

        // Index lock contention
        if stderr_lower.contains("index.lock")
            || stderr_lower.contains("another git process")
            || (stderr_lower.contains("unable to create") && stderr_lower.contains(".lock"))
        {
            return Self::IndexLocked(format!(
                "{}: Index locked - {}",
                command,
                extract_meaningful_message(stderr)
            ));
        }

        // Permission errors
        if stderr_lower.contains("permission denied")
            || stderr_lower.contains("read-only")
            || stderr_lower.contains("cannot open")
        {
            return Self::Permission(format!(
                "{}: Permission error - {}",
                command,
                extract_meaningful_message(stderr)
            ));
        }

        // Unknown error
        Self::Unknown(format!(
            "{}: {}",
            command,
            extract_meaningful_message(stderr)
        ))
    }

    /// Get a user-friendly error message with actionable guidance
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NothingToCommit(msg) => format!(
                "{msg}\n\nThe working tree was clean by the time the commit ran \
                 (likely a race with an external change); the next cycle re-probes."
            ),
            Self::HookRejected(msg) => format!(
                "{msg}\n\nSuggestions:\n\
                 - Check the repository's commit hooks for what they refuse\n\
                 - Fix the reported problem; the next cycle retries the commit"
            ),
            Self::NotARepository(msg) => format!(
                "{msg}\n\nSuggestions:\n\
                 - Point the watcher at a directory inside a git work tree\n\
                 - Run 'git init' in the directory if it should be one"
            ),
            Self::IndexLocked(msg) => format!(
                "{msg}\n\nSuggestions:\n\
                 - Another git process is active; the next cycle retries\n\
                 - Remove a stale .git/index.lock if no git process is running"
            ),
            Self::Permission(msg) => format!(
                "{msg}\n\nSuggestions:\n\
                 - Check file and directory permissions\n\
                 - Ensure the watcher has write access to the repository"
            ),
            Self::Unknown(msg) => format!(
                "{msg}\n\nThis is an unexpected error. Please check the message above for details."
            ),
        }
    }

    /// Check if this error type is transient and likely to clear on a later
    /// cycle without intervention
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::IndexLocked(_) | Self::NothingToCommit(_))
    }

    /// Get a short description of the error type
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NothingToCommit(_) => "Nothing to Commit",
            Self::HookRejected(_) => "Hook Rejected",
            Self::NotARepository(_) => "Not a Repository",
            Self::IndexLocked(_) => "Index Locked",
            Self::Permission(_) => "Permission Denied",
            Self::Unknown(_) => "Unknown Error",
        }
    }
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Self::NothingToCommit(msg)
        | Self::HookRejected(msg)
        | Self::NotARepository(msg)
        | Self::IndexLocked(msg)
        | Self::Permission(msg)
        | Self::Unknown(msg)) = self;
        write!(f, "{msg}")
    }
}

impl std::error::Error for GitError {}

/// Extract the most meaningful part of the error message
///
/// Removes noise and focuses on the actual error description
fn extract_meaningful_message(stderr: &str) -> String {
    // Take first 3 non-empty lines (usually contains the key info)
    let lines: Vec<&str> = stderr
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(3)
        .collect();

    if lines.is_empty() {
        return "No error details available".to_string();
    }

    lines.join(" | ")
}
