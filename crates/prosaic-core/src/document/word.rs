//! A single word of a [`Document`](super::Document).

use std::ops::Range;

/// One word with its position and analysis flags.
///
/// Created by [`Document::load`](super::Document::load); the flags are set
/// by [`Document::finalize`](super::Document::finalize). Words are never
/// removed, only invalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Word {
    /// Surface text. Hyphen-split words are rejoined here.
    pub text: String,
    /// Byte offset of the word in the source.
    pub start: usize,
    /// Byte offset just past the word in the source.
    pub end: usize,
    /// Sentence index.
    pub sentence: usize,
    /// Zero-based position within the sentence.
    pub position: usize,
    /// Paragraph index.
    pub paragraph: usize,
    /// Syllable count.
    pub syllables: usize,
    /// Punctuation marks attached to this word.
    pub punctuation_count: usize,
    /// A number (`42`, `3.14`, `1990s`).
    pub numeric: bool,
    /// Counted by the analysis.
    pub valid: bool,
    /// A proper noun.
    pub proper_noun: bool,
    /// A proper noun naming a person or other non-dictionary entity.
    pub personal: bool,
    /// An all-caps acronym (`NASA`).
    pub acronym: bool,
    /// All caps for emphasis (`STOP RIGHT NOW`).
    pub exclamatory: bool,
    /// A hashtag or handle.
    pub social_media_tag: bool,
    /// A URL, e-mail address or file path.
    pub file_address: bool,
    /// A contraction (`isn't`, `we'll`).
    pub contraction: bool,
    /// An abbreviation with its period (`Dr.`, `e.g.`).
    pub abbreviation: bool,
}

impl Word {
    /// Source byte range.
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Lowercase text with typographic apostrophes folded.
    pub fn lowercase(&self) -> String {
        crate::collaborators::normalize(&self.text)
    }

    /// Characters, not counting apostrophes and periods.
    pub fn letter_len(&self) -> usize {
        crate::chars::letter_count(&self.text)
    }
}
