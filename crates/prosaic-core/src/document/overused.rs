//! Words repeated within one sentence.

use std::collections::HashMap;

use super::{Document, OverusedWord, Word};

const MIN_LETTERS: usize = 4;

impl Document {
    fn counts_for_overuse(&self, word: &Word) -> bool {
        !word.numeric
            && !word.proper_noun
            && !word.acronym
            && !word.contraction
            && !word.file_address
            && !word.social_media_tag
            && word.letter_len() >= MIN_LETTERS
            && !self.stop_words.contains(&word.text)
    }

    fn overuse_key(&self, word: &Word) -> String {
        if !self.config.stem_overused_words {
            return word.lowercase();
        }
        debug_assert!(
            self.stemmer.is_some(),
            "stem_overused_words is set but no stemmer was supplied"
        );
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&word.lowercase()),
            None => word.lowercase(),
        }
    }

    /// Record every (stemmed) word that appears twice or more in a valid
    /// sentence.
    pub(super) fn find_overused_words(&mut self) {
        let mut found = Vec::new();
        for (index, sentence) in self.sentences.iter().enumerate() {
            if !sentence.valid {
                continue;
            }
            let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
            for word in sentence.words() {
                if self.counts_for_overuse(&self.words[word]) {
                    groups
                        .entry(self.overuse_key(&self.words[word]))
                        .or_default()
                        .push(word);
                }
            }
            let mut repeated: Vec<OverusedWord> = groups
                .into_iter()
                .filter(|(_, words)| words.len() >= 2)
                .map(|(stem, words)| OverusedWord {
                    sentence: index,
                    stem,
                    words,
                })
                .collect();
            repeated.sort_by_key(|overused| overused.words[0]);
            found.extend(repeated);
        }
        self.hits.overused_words = found;
    }
}
