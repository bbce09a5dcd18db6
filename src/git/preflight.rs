//! Checks run before any question is asked.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Check that the `git` binary is on PATH.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|_| GitError::NotInstalled)
}

/// Check that `path` is inside a non-bare git work tree.
///
/// Returns the work tree root.
pub fn ensure_repository(path: &Path) -> Result<PathBuf, GitError> {
    let repo = Repository::discover(path)
        .map_err(|e| GitError::NotARepository(e.message().to_string()))?;

    let workdir = repo.workdir().ok_or_else(|| {
        GitError::NotARepository("bare repositories have no working tree".to_string())
    })?;

    debug!("Using repository at {}", workdir.display());
    Ok(workdir.to_path_buf())
}
