//! Sequential question flow producing an [`AnswerRecord`].

use console::style;
use tracing::debug;

use crate::commit::{AnswerRecord, CommitType};
use crate::config::Config;
use crate::emoji::EmojiCatalog;
use crate::error::PromptError;
use crate::prompt::Prompter;

/// Asks the commit questions in a fixed order.
pub struct Collector<P: Prompter> {
    prompter: P,
    catalog: EmojiCatalog,
    config: Config,
}

impl<P: Prompter> Collector<P> {
    pub fn new(prompter: P, catalog: EmojiCatalog, config: Config) -> Self {
        Self {
            prompter,
            catalog,
            config,
        }
    }

    /// Ask every question and return the trimmed answers.
    ///
    /// Order: gitmoji, type, scope (unless disabled), description, body, issue.
    pub fn collect(&self) -> Result<AnswerRecord, PromptError> {
        let selection = self.autocomplete("Commit summary", |query| self.catalog.filter(query))?;
        let emoji = self.catalog.format_selection(&selection)?.to_string();

        let commit_type = self.autocomplete("Choose commit type", CommitType::filter)?;

        let scope = if self.config.skip_scope {
            String::new()
        } else {
            self.ask("Enter commit scope (optional)", false)?
        };

        let description = self.ask("Enter commit title", true)?;
        let body = self.ask("Enter commit body (optional)", false)?;
        let issue = self.ask("References issue/PR (optional)", false)?;

        let answers = AnswerRecord {
            commit_type,
            scope,
            description,
            body,
            issue,
            emoji,
        };
        debug!("Collected answers: {:?}", answers);

        Ok(answers)
    }

    fn ask(&self, prompt: &str, required: bool) -> Result<String, PromptError> {
        Ok(self.prompter.input(prompt, required)?.trim().to_string())
    }

    /// Filter `source` by a typed query, then let the user pick one match.
    ///
    /// An empty query lists every choice. A query without matches is asked again.
    fn autocomplete<F>(&self, prompt: &str, source: F) -> Result<String, PromptError>
    where
        F: Fn(&str) -> Vec<String>,
    {
        let filter_prompt = format!("{} (type to filter, enter for all)", prompt);

        loop {
            let query = self.prompter.input(&filter_prompt, false)?;
            let choices = source(&query);

            if choices.is_empty() {
                println!("{}", style(format!("No match for '{}'", query.trim())).yellow());
                continue;
            }

            let index = self.prompter.select(prompt, &choices)?;
            return choices
                .into_iter()
                .nth(index)
                .ok_or_else(|| PromptError::NoChoices(prompt.to_string()));
        }
    }
}
