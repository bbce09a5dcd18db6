//! committer - Git wrapper for committing in the conventional commit format.
//!
//! # Overview
//!
//! committer asks for a gitmoji, a conventional commit type, an optional scope,
//! a description, an optional body and an optional issue reference, renders
//! them into one commit message, and runs `git add`, `git commit` and
//! `git push` as requested.

pub mod commit;
pub mod config;
pub mod emoji;
pub mod error;
pub mod git;
pub mod prompt;

// Re-export commonly used types
pub use commit::{AnswerRecord, CommitType, compose_message, validate};
pub use config::Config;
pub use emoji::{EmojiCatalog, EmojiEntry};
pub use error::{EmojiError, GitError, PromptError, ValidationError};
pub use git::{CommitOptions, Committer, GitCommand, GitRunner, ProcessRunner};
pub use prompt::{Collector, Prompter, TerminalPrompter};
