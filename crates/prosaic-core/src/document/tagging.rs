//! Per-word tagging and contraction detection.

use std::sync::LazyLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use regex::Regex;

use super::Document;
use super::Word;
use super::punctuation::any_between;
use crate::chars;
use crate::collaborators::normalize;
use crate::dictionaries::abbreviations::is_abbreviation;

/// Whole-word URLs, e-mail addresses, paths and file names.
static FILE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xi)^(?:
            (?:[a-z][a-z0-9+.-]*://|www\.)\S+
          | [a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)+
          | (?:[a-z]:\\|\\\\|~/|\.{1,2}/|/)\S+
          | [a-z0-9_-]+(?:[/\\][a-z0-9_-]+)*[/\\][a-z0-9_-]+\.[a-z0-9]{1,5}
          | [a-z0-9_-]+(?:\.[a-z0-9_-]+)*\.(?:com|org|net|edu|gov|io|dev|txt|md|pdf|docx?|xlsx?|csv|json|toml|ya?ml|html?|rs|py|js|ts|png|jpe?g|gif|svg|zip|exe)
        )$"#,
    )
    .expect("valid regex")
});

/// Apostrophe suffixes that complete the word in front of them.
const DETACHED_SUFFIXES: &[&str] = &["'ll", "'re", "'ve", "'d", "'m", "'s", "'t", "n't"];

/// Single-word endings of a contraction.
const CONTRACTED_ENDINGS: &[&str] = &["n't", "'re", "'ll", "'ve", "'d", "'m"];

/// Words whose `'s` means "is" or "has", not a possessive.
const S_CONTRACTION_HOSTS: &[&str] = &[
    "it", "that", "there", "here", "what", "who", "where", "how", "let", "when", "why", "she",
    "he", "this", "everyone", "nobody", "somebody", "someone", "something", "nothing",
];

/// Fixed contractions that fit no suffix rule.
const IRREGULAR_CONTRACTIONS: &[&str] = &[
    "o'clock", "ma'am", "y'all", "'tis", "'twas", "'em", "'cause", "'til", "'bout", "'round",
    "ne'er", "e'er", "o'er", "rock'n'roll",
];

fn tag_word(word: &mut Word) {
    word.file_address = FILE_ADDRESS.is_match(&word.text);
    word.social_media_tag = {
        let mut chars = word.text.chars();
        matches!(chars.next(), Some('#' | '@')) && chars.next().is_some_and(char::is_alphanumeric)
    };
    word.abbreviation = is_abbreviation(&word.text);
}

impl Document {
    /// Tag file addresses, social media tags and abbreviations.
    pub(super) fn tag_words(&mut self) {
        #[cfg(feature = "parallel")]
        let words = self.words.par_iter_mut();
        #[cfg(not(feature = "parallel"))]
        let words = self.words.iter_mut();
        words.for_each(tag_word);
    }

    /// Tag contractions, written whole (`isn't`) or split across two words
    /// with nothing between them (`we 'll`).
    pub(super) fn tag_contractions(&mut self) {
        let mut index = 0;
        while index < self.words.len() {
            let next = index + 1;
            let joined = next < self.words.len()
                && self.words[next].sentence == self.words[index].sentence
                && !any_between(&self.punctuation, index)
                && DETACHED_SUFFIXES.contains(&normalize(&self.words[next].text).as_str());
            if joined {
                self.words[index].contraction = true;
                self.words[next].contraction = true;
                index += 2;
                continue;
            }
            let contraction = self.is_contraction(&self.words[index].text);
            self.words[index].contraction = contraction;
            index += 1;
        }
    }

    fn is_contraction(&self, text: &str) -> bool {
        let lower = normalize(text);
        if !lower.contains('\'') {
            return false;
        }
        if IRREGULAR_CONTRACTIONS.contains(&lower.as_str())
            || CONTRACTED_ENDINGS.iter().any(|ending| lower.ends_with(ending))
        {
            return true;
        }
        if let Some(host) = lower.strip_suffix("'s") {
            return S_CONTRACTION_HOSTS.contains(&host) || self.pronouns.matches(host);
        }
        // goin', nothin'
        lower.len() > 4
            && lower.ends_with("in'")
            && lower.chars().filter(|ch| chars::is_apostrophe(*ch)).count() == 1
    }
}
