//! Stage, commit and push a composed message.

use console::style;
use tracing::debug;

use crate::error::GitError;
use crate::git::command::GitCommand;
use crate::git::runner::GitRunner;

/// Returned by [`Committer::commit_changes`] once every step has run.
pub const COMMIT_SUCCESS: &str = "commit successful";

/// What to do around the commit, derived from CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
    /// Run `git add .` before committing.
    pub add: bool,
    /// GPG-sign the commit (`-S`).
    pub sign: bool,
    /// Run `git push` after a successful commit.
    pub push: bool,
}

/// Runs the git steps for one commit through a [`GitRunner`].
pub struct Committer<R: GitRunner> {
    runner: R,
}

impl<R: GitRunner> Committer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Stage (optional), commit, and push (optional), in that order.
    ///
    /// Steps:
    /// 1. `git add .` when `options.add`
    /// 2. `git commit [-S] -m <message>`
    /// 3. `git push` when `options.push`, as its own invocation
    ///
    /// The first failing step aborts the remaining ones and its error is
    /// returned.
    pub async fn commit_changes(
        &self,
        message: &str,
        options: &CommitOptions,
    ) -> Result<&'static str, GitError> {
        // 1. Stage everything
        if options.add {
            self.runner.run(&GitCommand::Add).await?;
            println!("{}", style("Staged untracked files").green());
        }

        // 2. Commit
        let commit = GitCommand::commit(message, options.sign);
        let output = self.runner.run(&commit).await?;
        debug!("git commit output: {}", output);
        println!("{}", style("Changes committed").green());

        // 3. Push
        if options.push {
            self.runner.run(&GitCommand::Push).await?;
            println!("{}", style("Pushed commit").green());
        }

        Ok(COMMIT_SUCCESS)
    }
}
