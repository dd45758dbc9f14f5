//! Findings collected by the analysis passes.
//!
//! Every hit refers to words by index into [`Document::words`](super::Document::words).

use std::ops::Range;

use crate::phrases::PhraseKind;

/// A run of consecutive words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// Index of the first word.
    pub first_word: usize,
    /// Number of words.
    pub len: usize,
}

impl WordSpan {
    /// Word indices covered.
    pub const fn range(&self) -> Range<usize> {
        self.first_word..self.first_word + self.len
    }
}

/// A catalogued phrase found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownPhraseHit {
    /// Words matched.
    pub span: WordSpan,
    /// Index of the phrase in its collection.
    pub phrase: usize,
    /// Category of the phrase.
    pub kind: PhraseKind,
}

/// A word sequence that recurs in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ngram {
    /// Normalized text, words joined by single spaces.
    pub text: String,
    /// Window size in words.
    pub size: usize,
    /// First word of every occurrence, in text order.
    pub occurrences: Vec<usize>,
}

/// A word repeated within a single sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverusedWord {
    /// Sentence index.
    pub sentence: usize,
    /// The shared (possibly stemmed) form.
    pub stem: String,
    /// Every word with that form, in order.
    pub words: Vec<usize>,
}

/// All findings of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hits {
    /// Wordy, cliché, redundant and error phrases.
    pub known_phrases: Vec<KnownPhraseHit>,
    /// Recurring n-grams.
    pub ngrams: Vec<Ngram>,
    /// Runs of proper nouns.
    pub proper_phrases: Vec<WordSpan>,
    /// Negated phrases.
    pub negated_phrases: Vec<WordSpan>,
    /// Second word of each adjacent duplicate pair.
    pub duplicate_words: Vec<usize>,
    /// Articles that do not fit the following word.
    pub mismatched_articles: Vec<usize>,
    /// Passive constructions.
    pub passive_voice: Vec<WordSpan>,
    /// Misspelled words.
    pub misspellings: Vec<usize>,
    /// Words repeated within a sentence.
    pub overused_words: Vec<OverusedWord>,
    /// Sentences opening with a coordinating conjunction.
    pub conjunction_starts: Vec<usize>,
    /// Sentences opening with a lowercase word.
    pub lowercase_starts: Vec<usize>,
}

impl Hits {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
