//! Sentence records.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// How a sentence (or paragraph) was classified.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    /// A terminated, counted sentence.
    Complete,
    /// Unterminated text that is neither a header nor a list.
    #[default]
    Incomplete,
    /// A short unterminated line standing on its own, such as a title.
    Header,
    /// One entry of an enumeration.
    ListItem,
}

impl SentenceType {
    /// Returns the type as a snake_case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::Header => "header",
            Self::ListItem => "list_item",
        }
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence: a contiguous run of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceInfo {
    /// Index of the first word.
    pub first_word: usize,
    /// Index of the last word (inclusive).
    pub last_word: usize,
    /// Punctuation that ended the sentence, if any.
    pub ending: Option<char>,
    /// Counted by the analysis.
    pub valid: bool,
    /// Classification.
    pub kind: SentenceType,
    /// Number of words.
    pub word_count: usize,
    /// Number of valid words.
    pub valid_word_count: usize,
    /// Number of clauses separated by colons, semicolons or dashes.
    pub unit_count: usize,
}

impl SentenceInfo {
    pub(crate) fn new(first_word: usize, last_word: usize, ending: Option<char>) -> Self {
        let terminated = ending.is_some_and(crate::chars::is_sentence_terminator);
        let word_count = last_word + 1 - first_word;
        Self {
            first_word,
            last_word,
            ending,
            valid: terminated,
            kind: if terminated {
                SentenceType::Complete
            } else {
                SentenceType::Incomplete
            },
            word_count,
            valid_word_count: if terminated { word_count } else { 0 },
            unit_count: 1,
        }
    }

    /// Word indices of the sentence.
    pub const fn words(&self) -> RangeInclusive<usize> {
        self.first_word..=self.last_word
    }

    /// Whether a sentence terminator (`.`, `!`, `?`, `…`, `‽`) ended it.
    pub fn is_terminated(&self) -> bool {
        self.ending.is_some_and(crate::chars::is_sentence_terminator)
    }

    pub(crate) fn invalidate(&mut self, kind: SentenceType) {
        self.valid = false;
        self.kind = kind;
    }

    pub(crate) fn validate(&mut self) {
        self.valid = true;
        self.kind = SentenceType::Complete;
    }
}
