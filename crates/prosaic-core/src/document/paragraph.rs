//! Paragraph records.

use std::ops::RangeInclusive;

use super::sentence::SentenceType;

/// A paragraph: a contiguous run of sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphInfo {
    /// Index of the first sentence.
    pub first_sentence: usize,
    /// Index of the last sentence (inclusive).
    pub last_sentence: usize,
    /// Blank lines in front of the paragraph.
    pub leading_blank_lines: usize,
    /// Contains at least one valid sentence.
    pub valid: bool,
    /// Classification, inherited from the sentence for one-sentence
    /// paragraphs.
    pub kind: SentenceType,
}

impl ParagraphInfo {
    pub(crate) const fn new(
        first_sentence: usize,
        last_sentence: usize,
        leading_blank_lines: usize,
    ) -> Self {
        Self {
            first_sentence,
            last_sentence,
            leading_blank_lines,
            valid: false,
            kind: SentenceType::Incomplete,
        }
    }

    /// Sentence indices of the paragraph.
    pub const fn sentences(&self) -> RangeInclusive<usize> {
        self.first_sentence..=self.last_sentence
    }

    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.last_sentence + 1 - self.first_sentence
    }
}
