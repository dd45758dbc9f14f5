//! Built-in word and phrase lists.
//!
//! Stop words used by overused-word, n-gram and negated-phrase detection,
//! the section titles that open a bibliography, the phrases that mark a
//! copyright notice, and a starter catalog of known phrases for the grammar
//! scan.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::phrases::PhraseKind;

/// Function words that carry no content of their own.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "nor", "so", "yet", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "up", "down", "out", "off", "over", "under", "about", "into",
        "onto", "through", "during", "before", "after", "above", "below", "between", "that",
        "this", "these", "those", "it", "its", "it's", "is", "are", "was", "were", "be", "been",
        "being", "am", "have", "has", "had", "having", "do", "does", "did", "done", "will",
        "would", "shall", "should", "could", "may", "might", "must", "can", "which", "who",
        "whom", "whose", "what", "when", "where", "why", "how", "if", "than", "then", "as",
        "there", "here", "also", "just", "very", "too", "only", "some", "any", "all", "each",
        "every", "both", "few", "more", "most", "much", "many", "such", "own", "same", "other",
        "another", "again", "further", "once", "i", "me", "my", "we", "us", "our", "you",
        "your", "he", "him", "his", "she", "her", "they", "them", "their", "one", "ones",
        "not", "no", "even", "ever", "still", "because", "while", "until", "though",
        "although", "whether", "like", "get", "got", "make", "made", "upon", "within",
        "without", "really", "quite", "rather", "said", "says",
    ]
    .into_iter()
    .collect()
});

/// Section titles that introduce a bibliography.
pub const CITATION_PHRASES: &[&str] = &[
    "references",
    "reference",
    "bibliography",
    "works cited",
    "literature cited",
    "sources",
    "citations",
    "notes",
    "endnotes",
    "further reading",
    "sources cited",
    "reference list",
];

/// Phrases that mark a trailing copyright or trademark notice.
pub const COPYRIGHT_PHRASES: &[&str] = &[
    "copyright",
    "all rights reserved",
    "trademark",
    "registered trademark",
    "used with permission",
    "reprinted with permission",
    "licensed under",
];

/// Given names and titles that are always personal proper nouns, even when
/// they double as dictionary words.
pub static KNOWN_PERSONAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bill", "bob", "jack", "mark", "rose", "grace", "hope", "faith", "joy", "will", "frank",
        "sue", "pat", "rich", "dawn", "april", "june", "august", "ray", "victor", "violet",
        "ruby", "hunter", "mason", "chase", "grant", "gene", "sandy", "penny", "wade", "bud",
        "mr", "mrs", "ms", "dr",
    ]
    .into_iter()
    .collect()
});

/// Known phrases as `(phrase, kind, suggestion)`.
pub const DEFAULT_KNOWN_PHRASES: &[(&str, PhraseKind, &str)] = &[
    ("at this point in time", PhraseKind::Wordy, "now"),
    ("due to the fact that", PhraseKind::Wordy, "because"),
    ("in order to", PhraseKind::Wordy, "to"),
    ("in the event that", PhraseKind::Wordy, "if"),
    ("for the purpose of", PhraseKind::Wordy, "for"),
    ("in spite of the fact that", PhraseKind::Wordy, "although"),
    ("a large number of", PhraseKind::Wordy, "many"),
    ("has the ability to", PhraseKind::Wordy, "can"),
    ("with regard to", PhraseKind::Wordy, "about"),
    ("in the near future", PhraseKind::Wordy, "soon"),
    ("at the present time", PhraseKind::Wordy, "now"),
    ("on a daily basis", PhraseKind::Wordy, "daily"),
    ("avoid it like the plague", PhraseKind::Cliche, ""),
    ("beat around the bush", PhraseKind::Cliche, ""),
    ("better late than never", PhraseKind::Cliche, ""),
    ("bite the bullet", PhraseKind::Cliche, ""),
    ("break the ice", PhraseKind::Cliche, ""),
    ("cut to the chase", PhraseKind::Cliche, ""),
    ("hit the nail on the head", PhraseKind::Cliche, ""),
    ("in the nick of time", PhraseKind::Cliche, ""),
    ("it goes without saying", PhraseKind::Cliche, ""),
    ("let the cat out of the bag", PhraseKind::Cliche, ""),
    ("piece of cake", PhraseKind::Cliche, ""),
    ("think outside the box", PhraseKind::Cliche, ""),
    ("at the end of the day", PhraseKind::Cliche, ""),
    ("low-hanging fruit", PhraseKind::Cliche, ""),
    ("under the weather", PhraseKind::Cliche, ""),
    ("absolutely essential", PhraseKind::Redundant, "essential"),
    ("advance planning", PhraseKind::Redundant, "planning"),
    ("basic fundamentals", PhraseKind::Redundant, "fundamentals"),
    ("close proximity", PhraseKind::Redundant, "proximity"),
    ("end result", PhraseKind::Redundant, "result"),
    ("free gift", PhraseKind::Redundant, "gift"),
    ("future plans", PhraseKind::Redundant, "plans"),
    ("past history", PhraseKind::Redundant, "history"),
    ("revert back", PhraseKind::Redundant, "revert"),
    ("unexpected surprise", PhraseKind::Redundant, "surprise"),
    ("could of", PhraseKind::Error, "could have"),
    ("should of", PhraseKind::Error, "should have"),
    ("would of", PhraseKind::Error, "would have"),
    ("irregardless", PhraseKind::Error, "regardless"),
    ("for all intensive purposes", PhraseKind::Error, "for all intents and purposes"),
    ("one in the same", PhraseKind::Error, "one and the same"),
];

/// Whether `word` is a stop word (case-insensitive).
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(crate::collaborators::normalize(word).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_lowercase() {
        for word in STOP_WORDS.iter() {
            assert_eq!(*word, word.to_lowercase());
        }
        assert!(is_stop_word("The"));
        assert!(!is_stop_word("prequel"));
    }

    #[test]
    fn known_phrases_are_lowercase() {
        for (phrase, _, _) in DEFAULT_KNOWN_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn citation_phrases_are_short() {
        for phrase in CITATION_PHRASES {
            assert!(phrase.split_whitespace().count() <= 3);
        }
    }
}
