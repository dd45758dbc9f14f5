//! Aggregate counts.

use serde::{Deserialize, Serialize};

use super::Document;
use crate::chars;

/// Totals over a finalized document.
///
/// `valid_*` fields only count what survived classification and
/// exclusions; `units` counts the clauses of valid sentences.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema,
)]
pub struct Counts {
    /// All words.
    pub words: usize,
    /// Valid words.
    pub valid_words: usize,
    /// All sentences.
    pub sentences: usize,
    /// Valid sentences.
    pub valid_sentences: usize,
    /// All paragraphs.
    pub paragraphs: usize,
    /// Valid paragraphs.
    pub valid_paragraphs: usize,
    /// Punctuation marks plus sentence endings.
    pub punctuation: usize,
    /// Punctuation belonging to valid sentences.
    pub valid_punctuation: usize,
    /// Syllables of all words.
    pub syllables: usize,
    /// Syllables of valid words.
    pub valid_syllables: usize,
    /// Clauses in valid sentences.
    pub units: usize,
}

impl Document {
    /// Count clauses and punctuation, then recompute every total.
    ///
    /// A sentence left without valid words is invalidated here, and so is
    /// a paragraph left without valid sentences.
    #[tracing::instrument(skip_all)]
    pub(super) fn count(&mut self) {
        for sentence in &mut self.sentences {
            sentence.unit_count = 1;
        }
        for mark in &self.punctuation {
            if !chars::is_unit_separator(mark.ch) {
                continue;
            }
            let word = &self.words[mark.word];
            let inside = if mark.connected {
                self.words
                    .get(mark.word + 1)
                    .is_some_and(|next| next.sentence == word.sentence)
            } else {
                word.position > 0
            };
            if inside {
                self.sentences[word.sentence].unit_count += 1;
            }
        }

        for sentence in &mut self.sentences {
            sentence.valid_word_count = self.words[sentence.words()]
                .iter()
                .filter(|word| word.valid)
                .count();
            if sentence.valid_word_count == 0 {
                sentence.valid = false;
            }
        }
        for paragraph in &mut self.paragraphs {
            paragraph.valid =
                paragraph.valid && self.sentences[paragraph.sentences()].iter().any(|s| s.valid);
        }

        let mut counts = Counts {
            words: self.words.len(),
            sentences: self.sentences.len(),
            paragraphs: self.paragraphs.len(),
            ..Counts::default()
        };
        for word in &self.words {
            counts.syllables += word.syllables;
            if word.valid {
                counts.valid_words += 1;
                counts.valid_syllables += word.syllables;
            }
        }
        for mark in &self.punctuation {
            counts.punctuation += 1;
            if self.sentences[self.words[mark.word].sentence].valid {
                counts.valid_punctuation += 1;
            }
        }
        for sentence in &self.sentences {
            let ended = sentence
                .ending
                .is_some_and(|ch| chars::is_sentence_terminator(ch) || ch == ';');
            if ended {
                counts.punctuation += 1;
            }
            if sentence.valid {
                counts.valid_sentences += 1;
                counts.units += sentence.unit_count;
                if ended {
                    counts.valid_punctuation += 1;
                }
            }
        }
        counts.valid_paragraphs = self.paragraphs.iter().filter(|p| p.valid).count();
        self.counts = counts;
    }
}
