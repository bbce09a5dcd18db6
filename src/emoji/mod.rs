//! Gitmoji catalog used to classify commits.

pub mod catalog;

pub use catalog::{EmojiCatalog, EmojiEntry};
