//! Sentence-level grammar checks.
//!
//! One left-to-right walk over each valid sentence looks, at every word,
//! for an adjacent duplicate, an article that does not fit the next word,
//! the start of a passive construction, and a known phrase. Words not
//! covered by a known phrase are spell-checked when a dictionary is
//! available.
//!
//! The word-level rules are exposed as plain functions over `&str` slices:
//!
//! ```
//! use prosaic_core::document::{article_mismatch, duplicate_words, passive_span};
//!
//! assert_eq!(duplicate_words(&["the", "the", "end"]), [1]);
//! assert!(article_mismatch("a", "apple"));
//! assert!(!article_mismatch("an", "hour"));
//! assert_eq!(passive_span(&["it", "was", "eaten", "by", "a", "dog"], 1), Some(5));
//! ```

use super::punctuation::any_between;
use super::{Document, KnownPhraseHit, Word, WordSpan};
use crate::chars;
use crate::dictionaries::participles::{is_be_verb, is_past_participle};
use crate::tokenizer::is_numeric_word;

/// Words that legitimately repeat ("I had had enough", "that that").
const REPEATABLE: &[&str] = &["had", "that"];

/// Vowel-initial prefixes pronounced with a leading consonant sound.
const CONSONANT_SOUND_PREFIXES: &[&str] = &[
    "uni", "use", "usu", "ure", "uti", "ura", "eu", "one", "once", "ewe", "ubiq", "unan",
];

/// Exceptions to [`CONSONANT_SOUND_PREFIXES`] ("an uninformed guess").
const VOWEL_SOUND_PREFIXES: &[&str] = &["unin", "unim", "unid", "unint"];

/// Words with a silent initial `h`.
const SILENT_H: &[&str] = &["hour", "honest", "honor", "honour", "heir"];

/// Letters whose spoken name starts with a vowel sound (`an FBI agent`).
const VOWEL_NAMED_LETTERS: &str = "AEIOFHLMNRSX";

const AGENT_DETERMINERS: &[&str] = &[
    "the", "a", "an", "his", "her", "their", "its", "our", "my", "your", "this", "that", "these",
    "those",
];

fn is_repeated_pair(previous: &str, word: &str) -> bool {
    previous.to_lowercase() == word.to_lowercase()
        && !is_numeric_word(word)
        && !word.ends_with('.')
        && !REPEATABLE.contains(&word.to_lowercase().as_str())
}

/// Indices of words equal (ignoring case) to the word before them.
///
/// Numbers, initials (`L. L. Bean`) and words that repeat legitimately are
/// skipped.
pub fn duplicate_words(words: &[&str]) -> Vec<usize> {
    (1..words.len())
        .filter(|&index| is_repeated_pair(words[index - 1], words[index]))
        .collect()
}

/// Whether `word` starts with a vowel sound, if that can be told.
fn starts_with_vowel_sound(word: &str) -> Option<bool> {
    let first = word.chars().next()?;
    if first.is_ascii_digit() {
        // eight, eleven, eighteen
        let group: String = word.chars().take_while(char::is_ascii_digit).collect();
        return Some(first == '8' || group == "11" || group == "18");
    }
    if !first.is_alphabetic() {
        return None;
    }

    let letters: Vec<char> = word.chars().filter(|ch| ch.is_alphabetic()).collect();
    let spelled_out = chars::is_all_caps(word)
        && (letters.len() <= 3 || !letters[1..].iter().any(|ch| "AEIOU".contains(*ch)));
    if spelled_out {
        return Some(VOWEL_NAMED_LETTERS.contains(first.to_ascii_uppercase()));
    }

    let lower = word.to_lowercase();
    if lower.starts_with(['a', 'e', 'i', 'o', 'u']) {
        let consonant = CONSONANT_SOUND_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
            && !VOWEL_SOUND_PREFIXES
                .iter()
                .any(|prefix| lower.starts_with(prefix));
        return Some(!consonant);
    }
    Some(SILENT_H.iter().any(|prefix| lower.starts_with(prefix)))
}

/// Whether the article `a`/`an` does not fit the word after it.
pub fn article_mismatch(article: &str, next: &str) -> bool {
    let wants_vowel = match article.to_lowercase().as_str() {
        "a" => false,
        "an" => true,
        _ => return false,
    };
    starts_with_vowel_sound(next).is_some_and(|vowel| vowel != wants_vowel)
}

/// Length of a passive construction starting at `words[at]`.
///
/// The pattern is a form of "to be", an optional "not", and a past
/// participle, extended by a "by" agent (`by the committee`) when one
/// follows.
pub fn passive_span(words: &[&str], at: usize) -> Option<usize> {
    if !is_be_verb(words.get(at)?) {
        return None;
    }
    let mut next = at + 1;
    if words.get(next).is_some_and(|word| word.eq_ignore_ascii_case("not")) {
        next += 1;
    }
    if !is_past_participle(words.get(next)?) {
        return None;
    }
    let mut end = next + 1;
    if words.get(end).is_some_and(|word| word.eq_ignore_ascii_case("by")) && end + 1 < words.len() {
        end += 1;
        if AGENT_DETERMINERS.contains(&words[end].to_lowercase().as_str()) && end + 1 < words.len()
        {
            end += 1;
        }
        end += 1;
    }
    Some(end - at)
}

fn spell_checkable(word: &Word) -> bool {
    word.valid
        && !word.numeric
        && !word.proper_noun
        && !word.acronym
        && !word.exclamatory
        && !word.file_address
        && !word.social_media_tag
        && !word.abbreviation
        && word.text.chars().next().is_some_and(char::is_alphabetic)
}

#[derive(Default)]
struct GrammarFindings {
    duplicates: Vec<usize>,
    articles: Vec<usize>,
    passive: Vec<WordSpan>,
    phrases: Vec<KnownPhraseHit>,
    misspellings: Vec<usize>,
}

impl Document {
    /// End (exclusive, sentence-relative) of the punctuation-free run that
    /// starts at `offset`.
    fn unbroken_until(&self, first_word: usize, offset: usize, len: usize) -> usize {
        let mut end = offset + 1;
        while end < len && !any_between(&self.punctuation, first_word + end - 1) {
            end += 1;
        }
        end
    }

    /// Number of consecutive valid words from `from` up to `end`.
    fn valid_run(&self, from: usize, end: usize) -> usize {
        self.words[from..end].iter().take_while(|word| word.valid).count()
    }

    #[tracing::instrument(skip_all)]
    pub(super) fn scan_grammar(&mut self) {
        let mut found = GrammarFindings::default();
        for sentence in 0..self.sentences.len() {
            if self.sentences[sentence].valid {
                self.scan_sentence(sentence, &mut found);
            }
        }
        self.hits.duplicate_words = found.duplicates;
        self.hits.mismatched_articles = found.articles;
        self.hits.passive_voice = found.passive;
        self.hits.known_phrases = found.phrases;
        self.hits.misspellings = found.misspellings;
    }

    fn scan_sentence(&self, sentence: usize, found: &mut GrammarFindings) {
        let first_word = self.sentences[sentence].first_word;
        let words = self.sentence_strs(sentence);
        let mut covered_until = 0;

        for (offset, text) in words.iter().enumerate() {
            let index = first_word + offset;
            let word = &self.words[index];

            if offset > 0
                && word.valid
                && self.words[index - 1].valid
                && !any_between(&self.punctuation, index - 1)
                && is_repeated_pair(words[offset - 1], text)
            {
                found.duplicates.push(index);
            }

            if word.valid
                && offset + 1 < words.len()
                && !(offset > 0 && *text == "A")
                && !any_between(&self.punctuation, index)
                && article_mismatch(text, words[offset + 1])
            {
                found.articles.push(index);
            }

            if word.valid {
                let end = self.unbroken_until(first_word, offset, words.len());
                if let Some(len) = passive_span(&words[..end], offset) {
                    found.passive.push(WordSpan {
                        first_word: index,
                        len,
                    });
                }
            }

            if offset >= covered_until
                && let Some(phrase) = self.known_phrases.match_at(
                    &words,
                    offset,
                    self.valid_run(index, first_word + words.len()),
                )
            {
                let kind = self
                    .known_phrases
                    .phrase(phrase.index)
                    .map(|p| p.kind)
                    .unwrap_or_default();
                found.phrases.push(KnownPhraseHit {
                    span: WordSpan {
                        first_word: index,
                        len: phrase.len,
                    },
                    phrase: phrase.index,
                    kind,
                });
                covered_until = offset + phrase.len;
            }

            if offset >= covered_until
                && spell_checkable(word)
                && self
                    .dictionary
                    .as_ref()
                    .is_some_and(|dictionary| !dictionary.is_correct(text))
            {
                found.misspellings.push(index);
            }
        }
    }
}
