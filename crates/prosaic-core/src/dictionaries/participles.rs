//! Verb forms for passive voice detection.
//!
//! A passive construction is a form of "to be" followed by a past
//! participle. Regular participles end in "-ed"; irregular ones come from
//! [`IRREGULAR_PARTICIPLES`]. Words that end in "-ed" without being
//! participles ("hundred", "naked", "sacred") are listed in
//! [`NON_PARTICIPLE_ED`].

use std::collections::HashSet;
use std::sync::LazyLock;

/// Forms of "to be" that can open a passive construction.
pub static BE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "isn't", "aren't", "wasn't",
        "weren't", "isn’t", "aren’t", "wasn’t", "weren’t",
    ]
    .into_iter()
    .collect()
});

/// Irregular past participles.
pub static IRREGULAR_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // -en / -n participles
    set.extend([
        "arisen", "awoken", "beaten", "begotten", "bidden", "bitten", "blown", "broken",
        "chosen", "done", "drawn", "driven", "eaten", "fallen", "flown", "forbidden", "forgiven",
        "forgotten", "forsaken", "frozen", "given", "gone", "gotten", "grown", "hewn", "hidden",
        "known", "lain", "mistaken", "mown", "overtaken", "proven", "ridden", "risen", "sawn",
        "seen", "sewn", "shaken", "shorn", "shown", "slain", "sown", "spoken", "stolen",
        "stricken", "striven", "sworn", "taken", "thrown", "torn", "trodden", "undertaken",
        "withdrawn", "woken", "worn", "written", "overthrown", "rewritten", "undone",
    ]);

    // vowel-change participles
    set.extend([
        "begun", "bound", "brought", "built", "bought", "caught", "clung", "dealt", "dug",
        "drunk", "fed", "felt", "fought", "found", "flung", "ground", "held", "hung", "kept",
        "laid", "led", "left", "lent", "lit", "lost", "made", "meant", "met", "paid", "said",
        "sold", "sent", "shot", "slung", "sought", "spent", "spun", "struck", "stuck", "stung",
        "strung", "sung", "sunk", "swept", "swung", "taught", "told", "thought", "understood",
        "won", "wound", "wrung", "heard", "bent", "bred", "fled", "misled", "overcome",
        "withheld", "upheld", "become", "forgone",
    ]);

    // participles identical to the base form
    set.extend([
        "bet", "bid", "broadcast", "burst", "cast", "cost", "cut", "forecast", "hit", "hurt",
        "let", "put", "quit", "read", "set", "shed", "shut", "split", "spread", "thrust",
        "upset",
    ]);

    set
});

/// Words ending in "-ed" that are not past participles.
pub static NON_PARTICIPLE_ED: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bed", "biped", "bled", "breed", "creed", "crooked", "deed", "dogged", "embed",
        "exceed", "feed", "freed", "greed", "heed", "hundred", "indeed", "infrared", "jagged",
        "kindred", "naked", "need", "proceed", "ragged", "red", "reed", "rugged", "sacred",
        "seed", "shred", "sled", "sped", "speed", "steed", "succeed", "tweed", "wed", "weed",
        "wicked", "wretched", "beloved",
    ]
    .into_iter()
    .collect()
});

/// Whether the lowercase word is a form of "to be".
pub fn is_be_verb(word: &str) -> bool {
    BE_VERBS.contains(word.to_lowercase().as_str())
}

/// Whether the word is (probably) a past participle.
///
/// Irregular participles are matched from the list; regular ones need the
/// "-ed" suffix, more than three letters, and must not be on the exception
/// list.
pub fn is_past_participle(word: &str) -> bool {
    let lower = word.to_lowercase();
    if IRREGULAR_PARTICIPLES.contains(lower.as_str()) {
        return true;
    }
    lower.len() > 3
        && lower.ends_with("ed")
        && lower.chars().all(char::is_alphabetic)
        && !NON_PARTICIPLE_ED.contains(lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_verbs() {
        assert!(is_be_verb("was"));
        assert!(is_be_verb("Were"));
        assert!(is_be_verb("isn't"));
        assert!(!is_be_verb("seem"));
    }

    #[test]
    fn irregular_participles() {
        assert!(is_past_participle("given"));
        assert!(is_past_participle("written"));
        assert!(is_past_participle("Taken"));
    }

    #[test]
    fn regular_participles() {
        assert!(is_past_participle("completed"));
        assert!(is_past_participle("walked"));
    }

    #[test]
    fn non_participles() {
        assert!(!is_past_participle("seven"));
        assert!(!is_past_participle("hundred"));
        assert!(!is_past_participle("naked"));
        assert!(!is_past_participle("red"));
        assert!(!is_past_participle("running"));
    }
}
