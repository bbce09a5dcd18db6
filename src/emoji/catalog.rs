//! Bundled gitmoji catalog: loading, filtering and selection lookup.

use serde::Deserialize;
use tracing::debug;

use crate::error::EmojiError;

/// Gitmoji catalog bundled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../assets/gitmojis.json");

/// A single gitmoji with its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojiEntry {
    pub emoji: String,
    pub description: String,
}

impl EmojiEntry {
    /// Render the entry the way it is shown in the picker: `"glyph - description"`.
    pub fn render(&self) -> String {
        format!("{} - {}", self.emoji.trim(), self.description.trim())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    gitmojis: Vec<EmojiEntry>,
}

/// Read-only list of gitmojis, in catalog order.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    entries: Vec<EmojiEntry>,
}

impl EmojiCatalog {
    /// Load the catalog shipped with the binary.
    pub fn bundled() -> Result<Self, EmojiError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from `{"gitmojis": [{"emoji": .., "description": ..}]}`.
    pub fn from_json(json: &str) -> Result<Self, EmojiError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(EmojiError::InvalidCatalog)?;
        if file.gitmojis.is_empty() {
            return Err(EmojiError::EmptyCatalog);
        }

        debug!("Loaded {} gitmojis", file.gitmojis.len());

        Ok(Self {
            entries: file.gitmojis,
        })
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered entries containing `input` as a case-insensitive substring.
    ///
    /// Empty (or whitespace-only) input returns the whole catalog in order.
    pub fn filter(&self, input: &str) -> Vec<String> {
        let needle = input.trim().to_lowercase();

        self.entries
            .iter()
            .map(EmojiEntry::render)
            .filter(|rendered| rendered.to_lowercase().contains(&needle))
            .collect()
    }

    /// Strip a picked `"glyph - description"` string down to the glyph.
    ///
    /// Returns the first entry whose glyph occurs in `selection`. Callers must
    /// only pass strings produced by [`EmojiCatalog::filter`]; anything else
    /// is a logic error and surfaces as [`EmojiError::NoMatch`].
    pub fn format_selection(&self, selection: &str) -> Result<&str, EmojiError> {
        self.entries
            .iter()
            .find(|entry| selection.contains(entry.emoji.as_str()))
            .map(|entry| entry.emoji.as_str())
            .ok_or_else(|| EmojiError::NoMatch(selection.to_string()))
    }
}
