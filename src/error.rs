//! Error types for committer modules using thiserror.

use thiserror::Error;

/// Errors from answer validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Commit must have a type")]
    MissingType,

    #[error("Unknown commit type '{0}'. Expected one of: build, ci, chore, docs, feat, fix, perf, refactor, revert, style, test")]
    UnknownType(String),

    #[error("Commit must have a description")]
    MissingDescription,
}

/// Errors from the gitmoji catalog.
#[derive(Error, Debug)]
pub enum EmojiError {
    #[error("No gitmoji matches selection '{0}'")]
    NoMatch(String),

    #[error("Failed to parse gitmoji catalog: {0}")]
    InvalidCatalog(#[source] serde_json::Error),

    #[error("Gitmoji catalog is empty")]
    EmptyCatalog,
}

/// Errors from git invocations and repository checks.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found on PATH. Install git and try again.")]
    NotInstalled,

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the interactive prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Interactive prompts need a terminal")]
    NotATerminal,

    #[error("Nothing to choose from for '{0}'")]
    NoChoices(String),

    #[error(transparent)]
    Emoji(#[from] EmojiError),
}
