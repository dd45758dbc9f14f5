//! Locale-specific word classes: coordinating conjunctions, negating words,
//! and personal pronouns.
//!
//! Each class is a static lookup set per [`Language`]; the wrapper types
//! implement [`WordPredicate`] so a [`Document`](crate::Document) can take
//! them (or any caller-supplied predicate) interchangeably. Lookups are
//! case-insensitive and treat typographic apostrophes as straight ones.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::collaborators::{WordPredicate, normalize};

/// Language of the analyzed text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// German.
    German,
}

impl Language {
    /// Returns the language as a lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::German => "german",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type StaticSet = LazyLock<HashSet<&'static str>>;

static ENGLISH_CONJUNCTIONS: StaticSet =
    LazyLock::new(|| ["and", "but", "or", "nor", "so", "yet", "&"].into_iter().collect());

static SPANISH_CONJUNCTIONS: StaticSet = LazyLock::new(|| {
    ["y", "e", "o", "u", "ni", "pero", "mas", "sino"]
        .into_iter()
        .collect()
});

static GERMAN_CONJUNCTIONS: StaticSet = LazyLock::new(|| {
    ["und", "oder", "aber", "denn", "sondern", "doch", "&"]
        .into_iter()
        .collect()
});

static ENGLISH_NEGATORS: StaticSet = LazyLock::new(|| {
    [
        "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "nowhere", "cannot",
        "can't", "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "couldn't",
        "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "mustn't",
        "without",
    ]
    .into_iter()
    .collect()
});

static SPANISH_NEGATORS: StaticSet = LazyLock::new(|| {
    [
        "no", "nunca", "jamás", "nada", "nadie", "ninguno", "ninguna", "ningún", "tampoco", "ni",
        "sin",
    ]
    .into_iter()
    .collect()
});

static GERMAN_NEGATORS: StaticSet = LazyLock::new(|| {
    [
        "nicht", "kein", "keine", "keinen", "keinem", "keiner", "keines", "nie", "niemals",
        "nichts", "niemand", "ohne",
    ]
    .into_iter()
    .collect()
});

static ENGLISH_PRONOUNS: StaticSet = LazyLock::new(|| {
    [
        "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
        "him", "his", "himself", "she", "her", "hers", "herself", "we", "us", "our", "ours",
        "ourselves", "they", "them", "their", "theirs", "themselves", "i'm", "i've", "i'll",
        "i'd", "you're", "we're", "they're", "he's", "she's",
    ]
    .into_iter()
    .collect()
});

static SPANISH_PRONOUNS: StaticSet = LazyLock::new(|| {
    [
        "yo", "tú", "él", "ella", "nosotros", "nosotras", "vosotros", "vosotras", "ellos",
        "ellas", "usted", "ustedes", "me", "te", "nos", "os", "mí", "ti", "conmigo", "contigo",
    ]
    .into_iter()
    .collect()
});

static GERMAN_PRONOUNS: StaticSet = LazyLock::new(|| {
    [
        "ich", "du", "er", "sie", "wir", "ihr", "mich", "dich", "ihn", "uns", "euch", "mir",
        "dir", "ihm", "ihnen",
    ]
    .into_iter()
    .collect()
});

fn lookup(set: &HashSet<&'static str>, word: &str) -> bool {
    !word.is_empty() && set.contains(normalize(word).as_str())
}

/// Coordinating conjunctions for a language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conjunctions(pub Language);

impl WordPredicate for Conjunctions {
    fn matches(&self, word: &str) -> bool {
        let set = match self.0 {
            Language::English => &ENGLISH_CONJUNCTIONS,
            Language::Spanish => &SPANISH_CONJUNCTIONS,
            Language::German => &GERMAN_CONJUNCTIONS,
        };
        lookup(set, word)
    }
}

/// Negating words for a language.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegatingWords(pub Language);

impl WordPredicate for NegatingWords {
    fn matches(&self, word: &str) -> bool {
        let set = match self.0 {
            Language::English => &ENGLISH_NEGATORS,
            Language::Spanish => &SPANISH_NEGATORS,
            Language::German => &GERMAN_NEGATORS,
        };
        lookup(set, word)
    }
}

/// Personal pronouns for a language.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalPronouns(pub Language);

impl WordPredicate for PersonalPronouns {
    fn matches(&self, word: &str) -> bool {
        let set = match self.0 {
            Language::English => &ENGLISH_PRONOUNS,
            Language::Spanish => &SPANISH_PRONOUNS,
            Language::German => &GERMAN_PRONOUNS,
        };
        lookup(set, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_conjunctions() {
        let conjunctions = Conjunctions(Language::English);
        for word in ["and", "but", "or", "nor", "so", "yet", "&", "AND", "But", "YeT"] {
            assert!(conjunctions.matches(word), "{word} should be a conjunction");
        }
        assert!(!conjunctions.matches("an"));
        assert!(!conjunctions.matches("yes"));
        assert!(!conjunctions.matches(""));
    }

    #[test]
    fn other_language_conjunctions() {
        assert!(Conjunctions(Language::Spanish).matches("Pero"));
        assert!(Conjunctions(Language::German).matches("und"));
        assert!(!Conjunctions(Language::German).matches("and"));
    }

    #[test]
    fn negators_with_typographic_apostrophe() {
        let negators = NegatingWords(Language::English);
        assert!(negators.matches("not"));
        assert!(negators.matches("don’t"));
        assert!(negators.matches("Never"));
        assert!(!negators.matches("know"));
    }

    #[test]
    fn pronouns() {
        let pronouns = PersonalPronouns(Language::English);
        assert!(pronouns.matches("I"));
        assert!(pronouns.matches("themselves"));
        assert!(!pronouns.matches("it"));
        assert!(PersonalPronouns(Language::German).matches("Ich"));
    }

    #[test]
    fn language_display() {
        assert_eq!(Language::Spanish.to_string(), "spanish");
        assert_eq!(Language::default(), Language::English);
    }
}
