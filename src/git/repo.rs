// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading commit messages out of a repository.

use crate::error::{GitError, LintError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository exposing only what the linter reads.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path (or any directory inside it).
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintError::Git(GitError::NotARepository)
            } else {
                LintError::Git(GitError::from(e))
            }
        })?;

        Ok(Self { inner })
    }

    fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let invalid = |e: git2::Error| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        };

        self.inner
            .revparse_single(reference)
            .map_err(invalid)?
            .peel_to_commit()
            .map_err(invalid)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok(message.to_string())
    }

    /// Get `(sha, message)` pairs for a `from..to` range, newest first.
    ///
    /// A plain reference yields that single commit.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(
                commit.id().to_string(),
                commit.message().unwrap_or_default().to_string(),
            )]);
        };

        let walk_failed = |command: &str, e: git2::Error| {
            LintError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let from = self.get_commit(from)?.id();
        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?.id();

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| walk_failed("revwalk", e))?;
        revwalk
            .push(to)
            .map_err(|e| walk_failed("revwalk.push", e))?;
        revwalk
            .hide(from)
            .map_err(|e| walk_failed("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid: Oid = oid.map_err(|e| walk_failed("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                LintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((
                oid.to_string(),
                commit.message().unwrap_or_default().to_string(),
            ));
        }

        tracing::debug!("Found {} commits in range {}", commits.len(), range);
        Ok(commits)
    }
}

/// Get the commit message for a reference in the current repository.
pub fn get_commit_message(reference: &str) -> Result<String> {
    Repository::open_current()?.get_commit_message(reference)
}

/// Get the commits of a range in the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    Repository::open_current()?.get_commits_in_range(range)
}
