//! # Git Operations Seam
//!
//! The workers never spawn git themselves. They go through the
//! [`GitOperations`] trait so the clone/pull/check/report logic can be tested
//! with mock implementations that never touch the network.
//!
//! In the application, [`SystemGit`] is used, which delegates to the free
//! functions in [`crate::git`] using a configurable git program.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::defaults::DEFAULT_GIT_PROGRAM;
use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clone `url` into the directory `dest_dir/name`.
    fn clone_repo(&self, url: &str, dest_dir: &Path, name: &str) -> Result<()>;

    /// Update an existing checkout, returning a short summary of the pull.
    fn pull(&self, checkout: &Path) -> Result<String>;

    /// Verify that a remote repository exists and is reachable.
    fn ls_remote(&self, url: &str) -> Result<()>;

    /// The tag HEAD points at exactly, or `None` if HEAD is untagged.
    fn describe_exact_tag(&self, checkout: &Path) -> Result<Option<String>>;

    /// Author date of the most recent commit.
    fn last_commit_date(&self, checkout: &Path) -> Result<DateTime<FixedOffset>>;
}

/// The default implementation of `GitOperations`, which runs a real git
/// program as a subprocess.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl GitOperations for SystemGit {
    fn clone_repo(&self, url: &str, dest_dir: &Path, name: &str) -> Result<()> {
        crate::git::clone(&self.program, url, dest_dir, name)
    }

    fn pull(&self, checkout: &Path) -> Result<String> {
        crate::git::pull(&self.program, checkout)
    }

    fn ls_remote(&self, url: &str) -> Result<()> {
        crate::git::ls_remote(&self.program, url)
    }

    fn describe_exact_tag(&self, checkout: &Path) -> Result<Option<String>> {
        crate::git::describe_exact_tag(&self.program, checkout)
    }

    fn last_commit_date(&self, checkout: &Path) -> Result<DateTime<FixedOffset>> {
        crate::git::last_commit_date(&self.program, checkout)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_git_default_program() {
        let git = SystemGit::default();
        assert_eq!(git.program(), Path::new("git"));
    }

    #[test]
    fn test_system_git_custom_program() {
        let git = SystemGit::new("/usr/local/bin/git");
        assert_eq!(git.program(), Path::new("/usr/local/bin/git"));
    }

    #[test]
    fn test_system_git_is_usable_as_trait_object() {
        let git: Box<dyn GitOperations> = Box::new(SystemGit::new("/nonexistent/git"));
        assert!(git.ls_remote("https://example.com/repo").is_err());
    }
}
