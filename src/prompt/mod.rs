//! Interactive prompting for commit answers.

pub mod collector;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::PromptError;

pub use collector::Collector;

/// Trait for asking the user questions.
///
/// This abstraction allows scripting the answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Let the user pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Ask for free text. When `required` is false an empty answer is accepted.
    fn input(&self, prompt: &str, required: bool) -> Result<String, PromptError>;
}

/// Prompter backed by the terminal via dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Set up terminal prompting. Fails when stderr is not an interactive terminal.
    pub fn setup() -> Result<Self, PromptError> {
        if !Term::stderr().is_term() {
            return Err(PromptError::NotATerminal);
        }

        Ok(Self {
            theme: ColorfulTheme::default(),
        })
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&self, prompt: &str, required: bool) -> Result<String, PromptError> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(!required)
            .interact_text()?;
        Ok(value)
    }
}
