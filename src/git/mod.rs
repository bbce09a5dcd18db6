//! Git invocation: typed commands, the subprocess runner, and the committer.

pub mod command;
pub mod committer;
pub mod preflight;
pub mod runner;

pub use command::GitCommand;
pub use committer::{COMMIT_SUCCESS, CommitOptions, Committer};
pub use preflight::{check_git_installed, ensure_repository};
pub use runner::{GitRunner, ProcessRunner};
