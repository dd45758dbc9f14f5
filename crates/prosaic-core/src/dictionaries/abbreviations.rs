//! Abbreviations that keep their trailing period.
//!
//! The tokenizer consults this list to decide whether the period after a
//! word belongs to the word (`Dr.`) or ends the sentence. Entries that are
//! also ordinary English words (`no`, `fig`, `sun`, `mass`) are left out so
//! that "the sun." still closes its sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Lowercase abbreviations without their final period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "mx", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr",
        "hon", "esq", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr",
        "sen", "rep", "gov", "pres", "supt", "insp",
    ]);

    // Latin and scholarly
    set.extend([
        "etc", "vs", "cf", "viz", "ibid", "al", "approx", "ca", "esp", "eds", "trans", "vol",
        "vols", "pp", "ch", "chap", "sec", "nos", "para", "repr",
    ]);

    // Months and days that are not also words
    set.extend([
        "jan", "feb", "apr", "jun", "jul", "aug", "sept", "sep", "oct", "nov", "dec", "tues",
        "thurs", "thur", "thu",
    ]);

    // Addresses and organizations
    set.extend([
        "st", "ave", "blvd", "rd", "ln", "ste", "apt", "bldg", "dept", "univ", "inc", "corp",
        "ltd", "llc", "bros", "assn", "intl", "mfg", "natl", "govt",
    ]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "yds", "mi", "sq",
        "hr", "hrs", "mins", "secs", "mph", "kph", "rpm", "est",
    ]);

    set
});

/// Initialisms written with periods: `U.S.`, `e.g.`, `Ph.D.`, `L.`.
static INITIALISM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]{1,2}\.)*[A-Za-z]\.?$").expect("valid regex")
});

/// Whether `stem` (a word without its trailing period) keeps the period
/// that follows it.
pub fn keeps_trailing_period(stem: &str) -> bool {
    if stem.is_empty() {
        return false;
    }
    if stem.contains('.') {
        return INITIALISM.is_match(stem);
    }
    let mut chars = stem.chars();
    if let (Some(first), None) = (chars.next(), chars.next())
        && first.is_uppercase()
    {
        // A lone capital letter is an initial ("L. L. Bean").
        return true;
    }
    ABBREVIATIONS.contains(stem.to_lowercase().as_str())
}

/// Whether a word, as tokenized (period included), is an abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    word.strip_suffix('.')
        .is_some_and(|stem| !stem.is_empty() && keeps_trailing_period(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_keep_period() {
        assert!(keeps_trailing_period("Dr"));
        assert!(keeps_trailing_period("mrs"));
        assert!(keeps_trailing_period("etc"));
    }

    #[test]
    fn ordinary_words_do_not() {
        assert!(!keeps_trailing_period("sun"));
        assert!(!keeps_trailing_period("no"));
        assert!(!keeps_trailing_period("a"));
    }

    #[test]
    fn initials_and_initialisms() {
        assert!(keeps_trailing_period("L"));
        assert!(keeps_trailing_period("U.S"));
        assert!(keeps_trailing_period("e.g"));
        assert!(keeps_trailing_period("Ph.D"));
        assert!(!keeps_trailing_period("example.com"));
    }

    #[test]
    fn tokenized_abbreviations() {
        assert!(is_abbreviation("Dr."));
        assert!(is_abbreviation("n.d."));
        assert!(!is_abbreviation("Dr"));
        assert!(!is_abbreviation("."));
    }
}
