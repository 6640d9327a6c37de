use serde::{Deserialize, Serialize};
use validator::Validate;

use super::VocabError;

/// A single word/definition pair used as a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WordEntry {
    #[validate(length(min = 1, message = "word must not be empty"))]
    pub word: String,
    #[validate(length(min = 1, message = "definition must not be empty"))]
    pub definition: String,
    #[serde(default)]
    pub translation: Option<String>,    // Shown on the details panel
    #[serde(default)]
    pub example_usage: Option<String>,  // Shown on the details panel
}

#[cfg(test)]
impl WordEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            translation: None,
            example_usage: None,
        }
    }
}

/// The fixed set of entries a session is quizzed on. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<WordEntry>,
}

impl Vocabulary {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, VocabError> {
        if entries.is_empty() {
            return Err(VocabError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }

    #[cfg(test)]
    pub fn contains(&self, entry: &WordEntry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

/// Where the vocabulary of a session came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VocabularySource {
    Default,
    Uploaded { file_name: String },
}
