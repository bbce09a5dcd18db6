//! Commit answers, validation, and message composition.

pub mod answers;
pub mod message;

pub use answers::{AnswerRecord, CommitType, validate};
pub use message::compose_message;
