//! Copyright notice and bibliography suppression.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

use super::punctuation::{first_at_or_after, leading, trailing};
use super::{Document, SentenceInfo, SentenceType};
use crate::chars;

/// A year standing for a whole sentence in a reference (`2020`, `2020a`).
static BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[a-z]?$").expect("valid regex"));

impl Document {
    fn paragraph_words(&self, index: usize) -> RangeInclusive<usize> {
        let paragraph = &self.paragraphs[index];
        self.sentences[paragraph.first_sentence].first_word
            ..=self.sentences[paragraph.last_sentence].last_word
    }

    fn exclude_paragraph(&mut self, index: usize) {
        let paragraph = &mut self.paragraphs[index];
        paragraph.valid = false;
        for sentence in paragraph.sentences() {
            self.sentences[sentence].valid = false;
        }
    }

    /// Drop copyright and trademark notices.
    ///
    /// Any one- or two-sentence paragraph opening with a copyright glyph is
    /// excluded. In aggressive mode the last two valid paragraphs are also
    /// excluded when they mention a glyph or a copyright phrase anywhere.
    #[tracing::instrument(skip_all)]
    pub(super) fn exclude_copyright_notices(&mut self) {
        let mut excluded: Vec<usize> = (0..self.paragraphs.len())
            .filter(|&index| {
                let paragraph = &self.paragraphs[index];
                let first = self.sentences[paragraph.first_sentence].first_word;
                paragraph.sentence_count() <= 2
                    && leading(&self.punctuation, first).any(chars::is_copyright_symbol)
            })
            .collect();
        if self.config.aggressive_exclusion {
            excluded.extend(self.trailing_notices());
        }
        for index in excluded {
            tracing::debug!(paragraph = index, "excluding copyright notice");
            self.exclude_paragraph(index);
        }
    }

    fn trailing_notices(&self) -> Vec<usize> {
        let matcher = match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&self.config.copyright_phrases)
        {
            Ok(matcher) => Some(matcher),
            Err(err) => {
                tracing::warn!(error = %err, "copyright phrases unusable, checking glyphs only");
                None
            }
        };

        self.paragraphs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, paragraph)| paragraph.valid)
            .take(2)
            .map(|(index, _)| index)
            .filter(|&index| {
                let words = self.paragraph_words(index);
                let from = first_at_or_after(&self.punctuation, *words.start());
                let glyph = self.punctuation[from..]
                    .iter()
                    .take_while(|mark| mark.word <= *words.end())
                    .any(|mark| chars::is_copyright_symbol(mark.ch));
                glyph
                    || matcher.as_ref().is_some_and(|matcher| {
                        let text = self.words[words]
                            .iter()
                            .map(|word| word.text.as_str())
                            .collect::<Vec<_>>()
                            .join(" ");
                        matcher.is_match(&text)
                    })
            })
            .collect()
    }

    /// Drop a trailing bibliography.
    ///
    /// Looks upward from the last valid paragraph for a short heading such
    /// as "References" in the second half of the document (the last three
    /// quarters in aggressive mode), then excludes the heading and every
    /// following paragraph that reads like a reference entry.
    #[tracing::instrument(skip_all)]
    pub(super) fn exclude_citations(&mut self) {
        let Some(last_valid) = self.paragraphs.iter().rposition(|p| p.valid) else {
            return;
        };
        let count = self.paragraphs.len();
        let factor = if self.config.aggressive_exclusion { 4 } else { 2 };

        for index in (0..=last_valid).rev() {
            if index * factor < count {
                break;
            }
            if !self.is_citation_heading(index) {
                continue;
            }
            self.paragraphs[index].kind = SentenceType::Header;
            for sentence in self.paragraphs[index].sentences() {
                self.sentences[sentence].kind = SentenceType::Header;
            }
            self.exclude_paragraph(index);

            let mut end = index + 1;
            while end < count && self.looks_like_citation(end) {
                self.exclude_paragraph(end);
                end += 1;
            }
            tracing::debug!(heading = index, entries = end - index - 1, "excluded citations");
            return;
        }
    }

    fn is_short_heading(&self, index: usize) -> bool {
        let paragraph = &self.paragraphs[index];
        let words = self.paragraph_words(index);
        let last = &self.sentences[paragraph.last_sentence];
        let colon = last.ending == Some(':')
            || trailing(&self.punctuation, *words.end()).any(|ch| ch == ':');
        words.count() <= 3
            && (colon || matches!(paragraph.kind, SentenceType::Header | SentenceType::ListItem))
    }

    fn is_citation_heading(&self, index: usize) -> bool {
        if !self.is_short_heading(index) {
            return false;
        }
        let title = self.words[self.paragraph_words(index)]
            .iter()
            .map(|word| word.lowercase().trim_end_matches(':').to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.config
            .citation_phrases
            .iter()
            .any(|phrase| phrase.to_lowercase() == title)
    }

    fn is_year_sentence(&self, sentence: &SentenceInfo) -> bool {
        let word = &self.words[sentence.first_word];
        sentence.word_count == 1 && (BARE_YEAR.is_match(&word.text) || word.lowercase() == "n.d.")
    }

    fn looks_like_citation(&self, index: usize) -> bool {
        let sentences = &self.sentences[self.paragraphs[index].sentences()];
        let limit = if sentences.iter().any(|s| self.is_year_sentence(s)) {
            6
        } else {
            4
        };
        sentences.len() <= limit
            && !self.is_short_heading(index)
            && sentences.iter().filter(|s| s.word_count > 10).count() < 3
    }
}
