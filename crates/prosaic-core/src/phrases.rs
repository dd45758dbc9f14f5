//! Phrase collections: multi-word expressions matched word by word.
//!
//! The grammar scan looks up known phrases (wordy, cliché, redundant, error)
//! and exclusion uses the same machinery for user-excluded phrases. Matching
//! is case-insensitive and the longest phrase starting at a position wins.

use std::collections::HashMap;
use std::str::FromStr;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::collaborators::normalize;
use crate::error::{AnalysisError, AnalysisResult};

/// Category of a known phrase.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PhraseKind {
    /// Says in many words what fits in few.
    #[default]
    Wordy,
    /// Worn-out figure of speech.
    Cliche,
    /// Repeats itself ("end result").
    Redundant,
    /// Common usage error ("could of").
    Error,
}

impl PhraseKind {
    /// Returns the kind as a lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wordy => "wordy",
            Self::Cliche => "cliche",
            Self::Redundant => "redundant",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wordy" => Ok(Self::Wordy),
            "cliche" | "cliché" => Ok(Self::Cliche),
            "redundant" => Ok(Self::Redundant),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown phrase kind: {other}")),
        }
    }
}

/// One catalogued phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// Normalized (lowercase) words of the phrase.
    pub words: Vec<String>,
    /// Category.
    pub kind: PhraseKind,
    /// Suggested replacement, possibly empty.
    pub suggestion: String,
}

impl Phrase {
    /// Build a phrase from its text.
    pub fn new(text: &str, kind: PhraseKind, suggestion: &str) -> Self {
        Self {
            words: text.split_whitespace().map(normalize).collect(),
            kind,
            suggestion: suggestion.to_string(),
        }
    }

    /// The phrase joined with single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// A phrase found at some word offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Index of the phrase within its collection.
    pub index: usize,
    /// Number of words matched.
    pub len: usize,
}

/// Lookup contract for phrase collections.
pub trait PhraseCollection: Send + Sync {
    /// The longest phrase starting at `words[offset]` that is at most
    /// `max_len` words long.
    fn match_at(&self, words: &[&str], offset: usize, max_len: usize) -> Option<PhraseMatch>;

    /// The phrase at `index`, as reported by [`PhraseCollection::match_at`].
    fn phrase(&self, index: usize) -> Option<&Phrase>;
}

/// Phrase collection indexed by first word.
#[derive(Debug, Clone, Default)]
pub struct PhraseList {
    phrases: Vec<Phrase>,
    // first word -> phrase indices, longest first
    by_first_word: HashMap<String, Vec<usize>>,
}

impl PhraseList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from phrase texts, all of one kind.
    pub fn from_phrases<I, S>(phrases: I, kind: PhraseKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for phrase in phrases {
            list.push(Phrase::new(phrase.as_ref(), kind, ""));
        }
        list
    }

    /// The built-in catalog of known phrases.
    pub fn builtin() -> Self {
        let mut list = Self::new();
        for (text, kind, suggestion) in crate::word_lists::DEFAULT_KNOWN_PHRASES {
            list.push(Phrase::new(text, *kind, suggestion));
        }
        list
    }

    /// Parse `phrase[\tkind[\tsuggestion]]` lines.
    ///
    /// Blank lines and `#` comments are skipped. Lines with an unknown kind
    /// fall back to `default_kind`.
    pub fn from_lines(text: &str, default_kind: PhraseKind) -> Self {
        let mut list = Self::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let phrase = fields.next().unwrap_or_default();
            let kind = fields
                .next()
                .and_then(|kind| kind.parse().ok())
                .unwrap_or(default_kind);
            let suggestion = fields.next().unwrap_or_default().trim();
            list.push(Phrase::new(phrase, kind, suggestion));
        }
        list
    }

    /// Read a phrase file in the [`PhraseList::from_lines`] format.
    pub fn load(path: &Utf8Path, default_kind: PhraseKind) -> AnalysisResult<Self> {
        let text =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| AnalysisError::WordList {
                path: path.to_string(),
                source,
            })?;
        let list = Self::from_lines(&text, default_kind);
        tracing::debug!(path = %path, phrases = list.len(), "loaded phrase list");
        Ok(list)
    }

    /// Add a phrase. Empty phrases are ignored.
    pub fn push(&mut self, phrase: Phrase) {
        let Some(first) = phrase.words.first().cloned() else {
            return;
        };
        let index = self.phrases.len();
        let len = phrase.words.len();
        self.phrases.push(phrase);

        let bucket = self.by_first_word.entry(first).or_default();
        let position = bucket
            .iter()
            .position(|&other| self.phrases[other].words.len() < len)
            .unwrap_or(bucket.len());
        bucket.insert(position, index);
    }

    /// Append every phrase of `other`.
    pub fn extend(&mut self, other: Self) {
        for phrase in other.phrases {
            self.push(phrase);
        }
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl PhraseCollection for PhraseList {
    fn match_at(&self, words: &[&str], offset: usize, max_len: usize) -> Option<PhraseMatch> {
        let first = normalize(words.get(offset)?);
        let candidates = self.by_first_word.get(&first)?;
        let available = max_len.min(words.len() - offset);

        candidates.iter().find_map(|&index| {
            let phrase = &self.phrases[index];
            let len = phrase.words.len();
            let matches = len <= available
                && phrase.words[1..]
                    .iter()
                    .zip(&words[offset + 1..offset + len])
                    .all(|(expected, word)| *expected == normalize(word));
            matches.then_some(PhraseMatch { index, len })
        })
    }

    fn phrase(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }
}
