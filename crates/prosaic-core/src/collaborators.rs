//! Contracts for the services a [`Document`](crate::Document) consults.
//!
//! Syllable counting, stemming, word classes, word lists, and spell checking
//! are supplied by the caller. They are shared read-only for the whole
//! analysis (hence `Send + Sync`) and never mutated by the engine.
//!
//! Closures work wherever a single-method trait is expected:
//!
//! ```
//! use prosaic_core::collaborators::{SpellJudge, WordPredicate};
//!
//! let is_article = |word: &str| matches!(word, "a" | "an" | "the");
//! assert!(is_article.matches("an"));
//!
//! let everything_is_fine = |_: &str| true;
//! assert!(everything_is_fine.is_correct("teh"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::Utf8Path;

use crate::dictionaries::syllables;
use crate::error::{AnalysisError, AnalysisResult};

/// Counts the syllables in a word.
pub trait Syllabizer: Send + Sync {
    /// Number of syllables in `word`.
    fn count(&self, word: &str) -> usize;
}

/// Reduces a word to its stem.
pub trait Stemmer: Send + Sync {
    /// The stem of `word`.
    fn stem(&self, word: &str) -> String;
}

/// Classifies a single word (conjunction, negator, pronoun, ...).
pub trait WordPredicate: Send + Sync {
    /// Whether `word` belongs to the class.
    fn matches(&self, word: &str) -> bool;
}

/// A set of words with membership lookup.
pub trait WordList: Send + Sync {
    /// Whether `word` is on the list.
    fn contains(&self, word: &str) -> bool;
}

/// Judges spelling.
pub trait SpellJudge: Send + Sync {
    /// Whether `word` is spelled correctly.
    fn is_correct(&self, word: &str) -> bool;
}

impl<F> Syllabizer for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn count(&self, word: &str) -> usize {
        self(word)
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

impl<F> WordPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, word: &str) -> bool {
        self(word)
    }
}

impl<F> SpellJudge for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_correct(&self, word: &str) -> bool {
        self(word)
    }
}

/// Syllable estimation by vowel groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingSyllabizer;

impl Syllabizer for EstimatingSyllabizer {
    fn count(&self, word: &str) -> usize {
        syllables::estimate(word)
    }
}

/// Strips common English inflectional suffixes.
///
/// Far from a real stemmer, but enough to fold "walks", "walked" and
/// "walking" together for sentence-local repetition checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer;

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        for suffix in ["ingly", "edly", "ings", "ing", "ies", "ied", "ed", "es", "ly", "s"] {
            if let Some(stem) = lower.strip_suffix(suffix)
                && stem.chars().count() >= 3
                && !stem.ends_with('s')
            {
                return match suffix {
                    "ies" | "ied" => format!("{stem}y"),
                    _ => stem.to_string(),
                };
            }
        }
        lower
    }
}

/// Case-insensitive word set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Build a set from one entry per line, skipping blank lines and `#`
    /// comments.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Read a one-entry-per-line file.
    pub fn load(path: &Utf8Path) -> AnalysisResult<Self> {
        let text =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| AnalysisError::WordList {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::from_lines(&text))
    }

    /// Add a word.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(normalize(word));
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }
}

impl SpellJudge for WordSet {
    fn is_correct(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// A built-in static word list.
#[derive(Debug, Clone, Copy)]
pub struct StaticList(pub &'static LazyLock<HashSet<&'static str>>);

impl WordList for StaticList {
    fn contains(&self, word: &str) -> bool {
        self.0.contains(normalize(word).as_str())
    }
}

/// Lowercase with typographic apostrophes folded to `'`.
pub(crate) fn normalize(word: &str) -> String {
    word.chars()
        .map(|ch| {
            if crate::chars::is_apostrophe(ch) {
                '\''
            } else {
                ch
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}
