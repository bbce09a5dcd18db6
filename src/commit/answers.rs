//! Collected commit answers, commit types, and validation.

use crate::error::ValidationError;

/// Conventional commit types offered by the type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Build,
    Ci,
    Chore,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
}

impl CommitType {
    /// All types, in the order they are offered.
    pub const ALL: [CommitType; 11] = [
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Docs,
        Self::Feat,
        Self::Fix,
        Self::Perf,
        Self::Refactor,
        Self::Revert,
        Self::Style,
        Self::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Docs => "docs",
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Perf => "perf",
            Self::Refactor => "refactor",
            Self::Revert => "revert",
            Self::Style => "style",
            Self::Test => "test",
        }
    }

    /// Type tokens containing `input` as a case-insensitive substring.
    pub fn filter(input: &str) -> Vec<String> {
        let needle = input.trim().to_lowercase();

        Self::ALL
            .iter()
            .map(CommitType::as_str)
            .filter(|token| token.contains(&needle))
            .map(String::from)
            .collect()
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("Unknown commit type: {}", s))
    }
}

/// Answers gathered from the user for one commit.
///
/// Empty `scope`, `body` and `issue` mean the field was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    pub commit_type: String,
    pub scope: String,
    pub description: String,
    pub body: String,
    pub issue: String,
    pub emoji: String,
}

/// Check the fields required to compose a commit message.
pub fn validate(answers: &AnswerRecord) -> Result<(), ValidationError> {
    if answers.commit_type.is_empty() {
        return Err(ValidationError::MissingType);
    }

    if answers.commit_type.parse::<CommitType>().is_err() {
        return Err(ValidationError::UnknownType(answers.commit_type.clone()));
    }

    if answers.description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    Ok(())
}
