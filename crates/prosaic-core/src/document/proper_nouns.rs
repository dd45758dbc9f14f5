//! Proper noun, acronym and personal-name detection.
//!
//! Capitalized words in the middle of complete sentences are taken as
//! proper nouns outright. Words whose capital letter might only mark the
//! start of a sentence (sentence-initial, after an opening quote or a
//! colon, or in headers and list items) are deferred to a second pass that
//! compares how often the word appears capitalized mid-sentence against how
//! often it appears in lowercase.

use std::collections::HashMap;

use super::punctuation::{leading, trailing};
use super::{Document, SentenceType, Word};
use crate::chars;

fn without_possessive(text: &str) -> &str {
    ["'s", "\u{2019}s", "'", "\u{2019}"]
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(text)
}

fn is_pronoun_i(text: &str) -> bool {
    text == "I" || text.starts_with("I'") || text.starts_with("I\u{2019}")
}

fn never_proper(word: &Word) -> bool {
    is_pronoun_i(&word.text)
        || word.numeric
        || word.file_address
        || word.social_media_tag
        || word.abbreviation
}

/// `Jean-Luc`, `Winston-Salem`.
fn is_capitalized_compound(text: &str) -> bool {
    let mut parts = text.split('-');
    let (Some(first), Some(second)) = (parts.next(), parts.next()) else {
        return false;
    };
    chars::starts_uppercase(first) && chars::starts_uppercase(second)
}

impl Document {
    #[tracing::instrument(skip_all)]
    pub(super) fn detect_proper_nouns(&mut self) {
        // case-sensitive, possessive stripped
        let mut proper_counts: HashMap<String, usize> = HashMap::new();
        // lowercase
        let mut common_counts: HashMap<String, usize> = HashMap::new();
        let mut deferred = Vec::new();

        for sentence in 0..self.sentences.len() {
            let complete = self.sentences[sentence].valid
                && self.sentences[sentence].kind == SentenceType::Complete;
            for index in self.sentences[sentence].words() {
                let word = &self.words[index];
                if never_proper(word) {
                    continue;
                }
                if !chars::starts_uppercase(&word.text) {
                    if complete {
                        *common_counts.entry(word.lowercase()).or_default() += 1;
                    }
                    continue;
                }
                if !complete
                    || word.position == 0
                    || leading(&self.punctuation, index).any(chars::is_quote)
                    || (index > 0 && trailing(&self.punctuation, index - 1).any(|ch| ch == ':'))
                {
                    deferred.push(index);
                    continue;
                }
                if chars::is_all_caps(&word.text) {
                    self.tag_capitals(index);
                    continue;
                }
                let key = without_possessive(&word.text).to_string();
                *proper_counts.entry(key).or_default() += 1;
                self.words[index].proper_noun = true;
            }
        }

        for index in deferred {
            if chars::is_all_caps(&self.words[index].text) {
                self.tag_capitals(index);
                continue;
            }
            let text = without_possessive(&self.words[index].text);
            let as_proper = proper_counts.get(text).copied().unwrap_or(0);
            let as_common = common_counts
                .get(&crate::collaborators::normalize(text))
                .copied()
                .unwrap_or(0);
            let proper = self
                .known_proper
                .as_ref()
                .is_some_and(|list| list.contains(text))
                || as_proper > as_common
                || is_capitalized_compound(text);
            self.words[index].proper_noun = proper;
        }

        for index in 0..self.words.len() {
            let word = &self.words[index];
            if !word.proper_noun || word.acronym {
                continue;
            }
            let text = without_possessive(&word.text);
            let personal = self.known_personal.contains(text)
                || self
                    .dictionary
                    .as_ref()
                    .is_some_and(|dictionary| !dictionary.is_correct(text));
            self.words[index].personal = personal;
        }
    }

    /// An all-caps word next to another one is shouting, otherwise it is an
    /// acronym.
    fn tag_capitals(&mut self, index: usize) {
        let sentence = self.words[index].sentence;
        let shouting = |other: usize| {
            self.words
                .get(other)
                .is_some_and(|word| word.sentence == sentence && chars::is_all_caps(&word.text))
        };
        let exclamatory = (index > 0 && shouting(index - 1)) || shouting(index + 1);
        let word = &mut self.words[index];
        if exclamatory {
            word.exclamatory = true;
        } else {
            word.acronym = true;
            word.proper_noun = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::collaborators::WordSet;
    use crate::config::AnalysisConfig;

    fn analyzed(doc: Document, text: &str) -> Document {
        let mut doc = doc;
        doc.analyze(text);
        doc
    }

    fn plain(text: &str) -> Document {
        analyzed(Document::new(AnalysisConfig::default()), text)
    }

    fn proper(doc: &Document) -> Vec<&str> {
        doc.words()
            .iter()
            .filter(|w| w.proper_noun)
            .map(|w| w.text.as_str())
            .collect()
    }

    #[test]
    fn mid_sentence_capitals_are_proper() {
        let doc = plain("We flew to Paris on Monday. The weather was fine.");
        assert_eq!(proper(&doc), ["Paris", "Monday"]);
    }

    #[test]
    fn sentence_initial_words_use_frequency() {
        let doc = plain("We met Alice today. Alice said hello. The end came.");
        assert_eq!(proper(&doc), ["Alice", "Alice"]);
    }

    #[test]
    fn lowercase_use_outweighs_capitals() {
        let doc = plain("Turkey is a country. We ate turkey and more turkey.");
        assert!(!doc.words()[0].proper_noun);
    }

    #[test]
    fn pronoun_i_is_not_proper() {
        let doc = plain("Then I said I'm done.");
        assert!(proper(&doc).is_empty());
    }

    #[test]
    fn acronyms_and_shouting() {
        let doc = plain("The NASA team said STOP RIGHT NOW to everyone.");
        let words = doc.words();
        assert!(words[1].acronym && words[1].proper_noun);
        assert!(words[4..7].iter().all(|w| w.exclamatory && !w.acronym));
    }

    #[test]
    fn known_proper_list_resolves_initial_words() {
        let known = WordSet::from_words(["Rust"]);
        let doc = analyzed(
            Document::new(AnalysisConfig::default()).with_known_proper(Arc::new(known)),
            "Rust is fast.",
        );
        assert!(doc.words()[0].proper_noun);
    }

    #[test]
    fn compounds_in_headers() {
        let doc = plain("Jean-Luc Picard\n\nThe captain spoke.");
        assert!(doc.words()[0].proper_noun);
    }

    #[test]
    fn personal_names() {
        let dictionary = WordSet::from_words(["we", "saw", "and", "in", "the", "park", "paris"]);
        let doc = analyzed(
            Document::new(AnalysisConfig::default()).with_dictionary(Arc::new(dictionary)),
            "We saw Zelda and Grace in Paris.",
        );
        let personal: Vec<&str> = doc
            .words()
            .iter()
            .filter(|w| w.personal)
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(personal, ["Zelda", "Grace"]);
    }

    #[test]
    fn possessives_share_a_count() {
        let doc = plain("We like Maria's idea. Maria agreed.");
        assert_eq!(proper(&doc), ["Maria's", "Maria"]);
    }
}
