//! Running git as a subprocess.
//!
//! Commands are spawned with `tokio::process::Command` against the system
//! `git` binary, inheriting the user's git config, GPG agent and credential
//! store. Arguments are passed as argv entries; no shell is involved.
//!
//! No timeout is applied: a `git` that never exits (for example waiting on
//! a credential prompt) blocks the run.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;
use crate::git::command::GitCommand;

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run the command and return its trimmed stdout.
    async fn run(&self, command: &GitCommand) -> Result<String, GitError>;
}

/// Runner that calls the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Run git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl GitRunner for ProcessRunner {
    async fn run(&self, command: &GitCommand) -> Result<String, GitError> {
        debug!("Running `{}` ({})", command, command.operation());

        let mut cmd = Command::new("git");
        cmd.args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|source| GitError::SpawnFailed {
            command: command.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // git reports some failures (e.g. "nothing to commit") on stdout
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(GitError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
