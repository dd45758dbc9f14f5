//! Optional phrase heuristics: negations, proper-noun phrases and
//! recurring n-grams.

use std::collections::HashMap;

use super::punctuation::any_between;
use super::{Document, Ngram, WordSpan};
use crate::chars;

impl Document {
    /// Contiguous, punctuation-free word runs of a valid sentence.
    fn unbroken_runs(&self, sentence: usize) -> Vec<std::ops::Range<usize>> {
        let info = &self.sentences[sentence];
        let mut runs = Vec::new();
        let mut start = info.first_word;
        for word in info.first_word..info.last_word {
            if any_between(&self.punctuation, word) {
                runs.push(start..word + 1);
                start = word + 1;
            }
        }
        runs.push(start..info.last_word + 1);
        runs
    }

    fn valid_sentences(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.sentences.len()).filter(|&index| self.sentences[index].valid)
    }

    /// A negator followed by stop words or names up to the first content
    /// word: `not the best`, `never Paris`.
    pub(super) fn find_negated_phrases(&mut self) {
        let mut found = Vec::new();
        for sentence in self.valid_sentences() {
            for run in self.unbroken_runs(sentence) {
                for start in run.clone() {
                    if !self.words[start].valid || !self.negators.matches(&self.words[start].text) {
                        continue;
                    }
                    let end = (start + 1..run.end).find(|&index| {
                        let word = &self.words[index];
                        !word.proper_noun && !self.stop_words.contains(&word.text)
                    });
                    if let Some(end) = end {
                        found.push(WordSpan {
                            first_word: start,
                            len: end - start + 1,
                        });
                    }
                }
            }
        }
        self.hits.negated_phrases = found;
    }

    /// Two or more adjacent capitalized words with at least one proper noun
    /// among them: `New York Times`, `Jean Luc Picard`.
    pub(super) fn find_proper_phrases(&mut self) {
        let mut found = Vec::new();
        for sentence in self.valid_sentences() {
            for run in self.unbroken_runs(sentence) {
                let mut index = run.start;
                while index < run.end {
                    let capitalized = |i: usize| {
                        let word = &self.words[i];
                        word.valid && (word.proper_noun || chars::starts_uppercase(&word.text))
                    };
                    if !capitalized(index) {
                        index += 1;
                        continue;
                    }
                    let mut end = index;
                    while end < run.end && capitalized(end) {
                        end += 1;
                    }
                    let mut first = index;
                    while first < end && self.stop_words.contains(&self.words[first].text) {
                        first += 1;
                    }
                    let mut last = end;
                    while last > first && self.stop_words.contains(&self.words[last - 1].text) {
                        last -= 1;
                    }
                    if last - first >= 2 && self.words[first..last].iter().any(|w| w.proper_noun) {
                        found.push(WordSpan {
                            first_word: first,
                            len: last - first,
                        });
                    }
                    index = end;
                }
            }
        }
        self.hits.proper_phrases = found;
    }

    /// Word sequences of each configured size that occur more than once.
    #[tracing::instrument(skip_all, fields(sizes = ?self.config.ngram_sizes))]
    pub(super) fn find_ngrams(&mut self) {
        let mut found = Vec::new();
        for &size in &self.config.ngram_sizes {
            if size < 2 {
                continue;
            }
            let mut order: Vec<String> = Vec::new();
            let mut occurrences: HashMap<String, Vec<usize>> = HashMap::new();
            for sentence in self.valid_sentences() {
                for run in self.unbroken_runs(sentence) {
                    if run.len() < size {
                        continue;
                    }
                    for start in run.start..=run.end - size {
                        let window = &self.words[start..start + size];
                        if window.iter().any(|w| !w.valid)
                            || window.iter().all(|w| self.stop_words.contains(&w.text))
                        {
                            continue;
                        }
                        let text = window
                            .iter()
                            .map(super::Word::lowercase)
                            .collect::<Vec<_>>()
                            .join(" ");
                        let entry = occurrences.entry(text.clone()).or_default();
                        if entry.is_empty() {
                            order.push(text);
                        }
                        entry.push(start);
                    }
                }
            }
            for text in order {
                if let Some(starts) = occurrences.remove(&text)
                    && starts.len() >= 2
                {
                    found.push(Ngram {
                        text,
                        size,
                        occurrences: starts,
                    });
                }
            }
        }
        self.hits.ngrams = found;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    fn analyzed(text: &str, config: AnalysisConfig) -> Document {
        let mut doc = Document::new(config);
        doc.analyze(text);
        doc
    }

    fn spans(doc: &Document, spans: &[WordSpan]) -> Vec<String> {
        spans.iter().map(|span| doc.span_text(*span)).collect()
    }

    #[test]
    fn negated_phrases() {
        let config = AnalysisConfig {
            search_negated_phrases: true,
            ..AnalysisConfig::default()
        };
        let doc = analyzed("It was not the best idea. We never, ever quit. Never Paris trips.", config);
        assert_eq!(
            spans(&doc, &doc.hits().negated_phrases),
            ["not the best", "Never Paris trips"]
        );
    }

    #[test]
    fn negations_off_by_default() {
        let doc = analyzed("It was not the best idea.", AnalysisConfig::default());
        assert!(doc.hits().negated_phrases.is_empty());
    }

    #[test]
    fn proper_phrases() {
        let config = AnalysisConfig {
            search_proper_phrases: true,
            ..AnalysisConfig::default()
        };
        let doc = analyzed(
            "We read the New York Times daily. Later, Alice met Bob Smith. Then Rome.",
            config,
        );
        assert_eq!(
            spans(&doc, &doc.hits().proper_phrases),
            ["New York Times", "Bob Smith"]
        );
    }

    #[test]
    fn recurring_ngrams() {
        let config = AnalysisConfig {
            ngram_sizes: vec![2, 3],
            ..AnalysisConfig::default()
        };
        let doc = analyzed(
            "The quick fox ran. A quick fox, then the quick fox. Of the end.",
            config,
        );
        let ngrams: Vec<(&str, usize)> = doc
            .hits()
            .ngrams
            .iter()
            .map(|n| (n.text.as_str(), n.occurrences.len()))
            .collect();
        assert_eq!(ngrams, [("the quick", 2), ("quick fox", 3), ("the quick fox", 2)]);
    }
}
