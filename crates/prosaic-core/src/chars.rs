//! Character classification used by the tokenizer and the analysis passes.

/// Apostrophe variants (straight and typographic).
pub const fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '\u{2018}' | '\u{02BC}')
}

/// Quotation marks, including guillemets and low-9 quotes.
pub const fn is_quote(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\''
            | '\u{201C}'
            | '\u{201D}'
            | '\u{201E}'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201A}'
            | '\u{00AB}'
            | '\u{00BB}'
            | '\u{2039}'
            | '\u{203A}'
    )
}

/// Hyphens and dashes.
pub const fn is_dash(ch: char) -> bool {
    matches!(
        ch,
        '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
    )
}

/// Punctuation that ends a sentence.
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '\u{2026}' | '\u{203D}')
}

/// Punctuation that may trail a terminator without starting anything new
/// (closing quotes and brackets).
pub const fn is_closing_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\''
            | '\u{201D}'
            | '\u{2019}'
            | '\u{00BB}'
            | '\u{203A}'
            | ')'
            | ']'
            | '}'
    )
}

/// Copyright, registered and trademark glyphs.
pub const fn is_copyright_symbol(ch: char) -> bool {
    matches!(ch, '\u{00A9}' | '\u{00AE}' | '\u{2122}')
}

/// List bullets, including the ASCII stand-ins people type.
pub const fn is_bullet(ch: char) -> bool {
    matches!(
        ch,
        '\u{2022}' | '\u{25E6}' | '\u{25AA}' | '\u{2023}' | '\u{00B7}' | '\u{2043}' | '*' | '-'
    )
}

/// Separators that split a sentence into units (colon, semicolon, dashes).
pub const fn is_unit_separator(ch: char) -> bool {
    matches!(ch, ':' | ';') || is_dash(ch)
}

/// Characters that can start or continue a word.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Characters that may join two word characters into one word
/// (`don't`, `well-known`, `3.14`, `1,000`, `12:30`, `and/or`).
pub fn is_word_joiner(ch: char) -> bool {
    is_apostrophe(ch) || matches!(ch, '-' | '\u{2011}' | '.' | ',' | ':' | '/' | '_' | '&')
}

/// Characters that may continue a word that already looks like a URL,
/// e-mail address or file path.
pub const fn is_address_char(ch: char) -> bool {
    matches!(
        ch,
        '/' | '\\' | ':' | '_' | '~' | '%' | '=' | '?' | '&' | '#' | '+' | '@' | '.' | '-'
    )
}

/// Whether the character is an uppercase letter.
pub fn is_upper(ch: char) -> bool {
    ch.is_uppercase()
}

/// Whether the word starts with an uppercase letter.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the word starts with a lowercase letter.
pub fn starts_lowercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_lowercase)
}

/// Whether every letter in the word is uppercase and there are at least two
/// letters (`NASA`, `U.S.`, but not `I` or `A`).
pub fn is_all_caps(word: &str) -> bool {
    let mut letters = 0usize;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if !ch.is_uppercase() {
                return false;
            }
            letters += 1;
        }
    }
    letters > 1
}

/// Number of characters in the word, ignoring apostrophes and periods.
pub fn letter_count(word: &str) -> usize {
    word.chars()
        .filter(|ch| !is_apostrophe(*ch) && *ch != '.')
        .count()
}
