//! Sentence and paragraph classification.
//!
//! These passes decide which sentences count. Everything that follows in
//! [`Document::finalize`] only looks at valid sentences, so the order here
//! matters: run classification first, then the promotions and demotions that
//! depend on it, then paragraphs.

use super::punctuation::{first_at_or_after, leading};
use super::{Document, SentenceType};
use crate::chars;

impl Document {
    fn paragraph_sentence_count(&self, sentence: usize) -> usize {
        let paragraph = self.words[self.sentences[sentence].first_word].paragraph;
        self.paragraphs[paragraph].sentence_count()
    }

    /// Short runs of unterminated sentences are headers, long runs are
    /// lists.
    pub(super) fn classify_incomplete_sentences(&mut self) {
        let count = self.sentences.len();
        let mut start = 0;
        while start < count {
            if self.sentences[start].valid {
                start += 1;
                continue;
            }
            let end = (start..count)
                .find(|&index| self.sentences[index].valid)
                .unwrap_or(count);
            let run = end - start;
            for index in start..end {
                let kind = if run >= 3 {
                    SentenceType::ListItem
                } else if self.paragraph_sentence_count(index) > 1 {
                    SentenceType::Incomplete
                } else {
                    SentenceType::Header
                };
                self.sentences[index].kind = kind;
            }
            start = end;
        }

        // "Ibid." standing alone
        for paragraph in &self.paragraphs {
            if paragraph.sentence_count() != 1 {
                continue;
            }
            let sentence = &mut self.sentences[paragraph.first_sentence];
            if sentence.word_count == 1 && self.words[sentence.first_word].abbreviation {
                sentence.invalidate(SentenceType::Header);
            }
        }
    }

    /// A clause closed by a semicolon and a line break counts as a sentence.
    /// The semicolon becomes its ending instead of a mark.
    pub(super) fn promote_semicolon_sentences(&mut self) {
        for index in 0..self.sentences.len() {
            let sentence = &self.sentences[index];
            if sentence.valid || sentence.ending != Some(';') {
                continue;
            }
            let last = sentence.last_word;
            let from = first_at_or_after(&self.punctuation, last);
            let found = self.punctuation[from..]
                .iter()
                .take_while(|mark| mark.word <= last + 1)
                .enumerate()
                .filter(|(_, mark)| mark.ch == ';' && mark.follows(last))
                .map(|(offset, _)| offset)
                .last();
            if let Some(offset) = found {
                let mark = self.punctuation.remove(from + offset);
                if let Some(owner) = self.words.get_mut(mark.word) {
                    owner.punctuation_count = owner.punctuation_count.saturating_sub(1);
                }
            }
            self.sentences[index].validate();
        }
    }

    /// Long unterminated sentences made of real words count; terminated
    /// ones without any real word do not.
    pub(super) fn reclassify_by_length(&mut self) {
        let threshold = self.config.long_sentence_threshold;
        let ratio = self.config.real_word_ratio;
        for sentence in &mut self.sentences {
            let real = self.words[sentence.words()]
                .iter()
                .filter(|word| !word.numeric && word.text.chars().count() > 1)
                .count();
            if !sentence.valid {
                if sentence.word_count > threshold
                    && real as f64 > ratio * sentence.word_count as f64
                {
                    sentence.validate();
                }
            } else if sentence.is_terminated() && real == 0 {
                sentence.invalidate(SentenceType::Incomplete);
            }
        }
    }

    /// A short valid sentence inside a run of invalid ones is a list item
    /// that happens to end in a period.
    pub(super) fn smooth_runs(&mut self) {
        let aggressive = self.config.aggressive_exclusion;
        let (max_words, min_run) = if aggressive {
            (10, 1)
        } else {
            (5, self.config.list_run_threshold)
        };
        let valid: Vec<bool> = self.sentences.iter().map(|s| s.valid).collect();

        for index in 0..valid.len() {
            if !valid[index] || self.sentences[index].word_count >= max_words {
                continue;
            }
            let before = valid[..index].iter().rev().take_while(|v| !**v).count();
            let after = valid[index + 1..].iter().take_while(|v| !**v).count();
            if before == 0 || after == 0 || before + after < min_run {
                continue;
            }
            self.sentences[index].invalidate(SentenceType::ListItem);
            if aggressive {
                for neighbour in (index - before..index).chain(index + 1..=index + after) {
                    self.sentences[neighbour].kind = SentenceType::ListItem;
                }
            }
        }
    }

    pub(super) fn classify_paragraphs(&mut self) {
        for paragraph in &mut self.paragraphs {
            let sentences = &self.sentences[paragraph.sentences()];
            paragraph.valid = sentences.iter().any(|s| s.valid);
            paragraph.kind = if let [only] = sentences {
                only.kind
            } else if paragraph.valid {
                SentenceType::Complete
            } else if sentences.iter().all(|s| s.kind == SentenceType::ListItem) {
                SentenceType::ListItem
            } else {
                SentenceType::Incomplete
            };
        }
    }

    pub(super) fn propagate_validity(&mut self) {
        for word in &mut self.words {
            word.valid = self.sentences[word.sentence].valid;
        }
    }

    /// Record valid sentences that open with a conjunction or a lowercase
    /// word.
    pub(super) fn tag_sentence_starts(&mut self) {
        let mut conjunctions = Vec::new();
        let mut lowercase = Vec::new();
        for (index, sentence) in self.sentences.iter().enumerate() {
            if !sentence.valid {
                continue;
            }
            let first = &self.words[sentence.first_word].text;
            if self.conjunctions.matches(first) {
                conjunctions.push(index);
            } else if chars::starts_lowercase(first) && !self.lowercase_start_allowed(index) {
                lowercase.push(index);
            }
        }
        self.hits.conjunction_starts = conjunctions;
        self.hits.lowercase_starts = lowercase;
    }

    /// Equations, bullets, addresses and brand names may start lowercase.
    fn lowercase_start_allowed(&self, index: usize) -> bool {
        let sentence = &self.sentences[index];
        let first = &self.words[sentence.first_word];
        let from = first_at_or_after(&self.punctuation, sentence.first_word);
        let equation = self.punctuation[from..]
            .iter()
            .take_while(|mark| mark.word <= sentence.last_word)
            .any(|mark| mark.ch == '=');
        equation
            || leading(&self.punctuation, sentence.first_word).any(chars::is_bullet)
            || first.text.starts_with("p-")
            || first.text.starts_with("t-")
            || first.file_address
            || first.text.chars().skip(1).any(char::is_uppercase)
    }
}
