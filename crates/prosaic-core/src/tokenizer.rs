//! Splits raw text into word tokens with sentence and paragraph boundaries.
//!
//! [`Tokenizer`] is a lazy, single-pass iterator. Each [`Token`] carries the
//! word, where it sits (sentence, paragraph, position), and the punctuation
//! met since the previous word. Sentence terminators that close a sentence
//! are not handed out as punctuation; they are reported through
//! [`Tokenizer::last_ending`] instead.
//!
//! ```
//! use prosaic_core::config::ParsingConfig;
//! use prosaic_core::tokenizer::Tokenizer;
//!
//! let mut tokens = Tokenizer::new("Hello there. General Kenobi!", ParsingConfig::default());
//! let words: Vec<_> = tokens.by_ref().map(|t| (t.text, t.sentence_index)).collect();
//! assert_eq!(words, [("Hello", 0), ("there", 0), ("General", 1), ("Kenobi", 1)]);
//! assert_eq!(tokens.last_ending(), Some('!'));
//! ```

use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex::Regex;

use crate::chars;
use crate::config::ParsingConfig;
use crate::dictionaries::abbreviations::keeps_trailing_period;

/// URLs, e-mail addresses and file paths, anchored at a word start.
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)^(?:
            (?:[A-Za-z][A-Za-z0-9+.-]*://|www\.)[^\s<>"]+
          | [A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+
          | (?:[A-Za-z]:\\|\\\\|~/|\.{1,2}/|/)[A-Za-z0-9_.~-]+(?:[/\\][A-Za-z0-9_.~-]+)*[/\\]?
        )"#,
    )
    .expect("valid regex")
});

/// A hyphen at a line end followed by the rest of the word.
static LINE_END_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\u{00AD}][ \t]*\r?\n[ \t]*").expect("valid regex"));

/// Digits with an ordinal or plural suffix (`1st`, `1990s`).
static NUMBER_WITH_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d[\d,.]*(?:st|nd|rd|th|s|'s|’s)$").expect("valid regex")
});

/// Words written with a leading apostrophe.
const ELISIONS: &[&str] = &[
    "'tis", "'twas", "'em", "'cause", "'til", "'bout", "'round", "'n", "'s", "'re", "'ll", "'ve",
    "'d", "'m", "'t",
];

/// Whether a word is a number (`42`, `3.14`, `1,000`, `12:30`, `50%`,
/// `1st`, `1990s`).
pub fn is_numeric_word(word: &str) -> bool {
    if !word.chars().any(|ch| ch.is_ascii_digit()) {
        return false;
    }
    word.chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | ':' | '/' | '%' | '-'))
        || NUMBER_WITH_SUFFIX.is_match(word)
}

/// Length of the address (URL, e-mail, path) starting `text`, without
/// trailing punctuation.
fn address_len(text: &str) -> Option<usize> {
    let found = ADDRESS.find(text)?;
    let trimmed = found.as_str().trim_end_matches(|ch: char| {
        matches!(ch, '.' | ',' | ';' | ':' | '!' | '?') || chars::is_closing_punctuation(ch)
    });
    // a bare "/" or "./" is punctuation, not a path
    trimmed
        .chars()
        .any(char::is_alphanumeric)
        .then_some(trimmed.len())
}

/// A punctuation mark met between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMark {
    /// The mark.
    pub ch: char,
    /// Touches the previous word (no whitespace in between).
    pub connected: bool,
}

/// One word of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Source text of the word. For a hyphen-split word this includes the
    /// hyphen and the line break.
    pub text: &'a str,
    /// Byte offset of the word in the source.
    pub start: usize,
    /// For a word split across lines: the parts before and after the break.
    pub split: Option<(&'a str, &'a str)>,
    /// Sentence the word belongs to.
    pub sentence_index: usize,
    /// Paragraph the word belongs to.
    pub paragraph_index: usize,
    /// Zero-based position within the sentence.
    pub sentence_position: usize,
    /// Whether the word is a number.
    pub is_numeric: bool,
    /// Punctuation since the previous word, in source order.
    pub punctuation: Vec<TokenMark>,
    /// Blank lines before the word's paragraph (meaningful on its first word).
    pub leading_blank_lines: usize,
}

impl Token<'_> {
    /// Whether the word was split by a line-end hyphen.
    pub const fn is_split_word(&self) -> bool {
        self.split.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct TerminatorRun {
    first: usize,
    end: usize,
    ch: char,
    ellipsis: bool,
    exclaims: bool,
    quoted: bool,
    open: bool,
}

/// Everything between two words.
#[derive(Debug, Default)]
struct Gap {
    marks: Vec<TokenMark>,
    terminator: Option<TerminatorRun>,
    last_significant: Option<char>,
    newlines: usize,
    blank_lines: usize,
    indented: bool,
    newline_after_terminator: bool,
    newline_after_semicolon: bool,
}

impl Gap {
    fn push(&mut self, ch: char, connected: bool) {
        let index = self.marks.len();
        if chars::is_sentence_terminator(ch) {
            match &mut self.terminator {
                None => {
                    self.terminator = Some(TerminatorRun {
                        first: index,
                        end: index + 1,
                        ch,
                        ellipsis: ch == '\u{2026}',
                        exclaims: matches!(ch, '!' | '?' | '\u{203D}'),
                        quoted: false,
                        open: true,
                    });
                }
                Some(run) if run.open => {
                    run.end = index + 1;
                    run.ellipsis |= ch == '.' || ch == '\u{2026}';
                    run.exclaims |= matches!(ch, '!' | '?' | '\u{203D}');
                }
                Some(_) => {}
            }
        } else if let Some(run) = &mut self.terminator {
            if run.open && chars::is_quote(ch) {
                run.quoted = true;
            }
            run.open = false;
        }
        if !chars::is_closing_punctuation(ch) {
            self.last_significant = Some(ch);
        }
        self.marks.push(TokenMark { ch, connected });
    }

    fn close_run(&mut self) {
        if let Some(run) = &mut self.terminator {
            run.open = false;
        }
    }

    fn newline(&mut self) {
        self.close_run();
        if self.terminator.is_some() {
            self.newline_after_terminator = true;
        }
        if self.last_significant == Some(';') {
            self.newline_after_semicolon = true;
        }
    }

    /// Remove the terminator run from the marks, returning its character.
    fn take_terminator(&mut self) -> Option<char> {
        let run = self.terminator.take()?;
        self.marks.drain(run.first..run.end);
        Some(run.ch)
    }

    /// Last punctuation touching the previous word, ignoring closing marks.
    fn trailing_mark(&self) -> Option<char> {
        self.marks
            .iter()
            .rev()
            .filter(|mark| mark.connected)
            .find(|mark| !chars::is_closing_punctuation(mark.ch))
            .map(|mark| mark.ch)
    }
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
    sentence: bool,
    paragraph: bool,
}

/// Lazy word tokenizer.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    config: ParsingConfig,
    pos: usize,
    emitted: usize,
    sentence_index: usize,
    paragraph_index: usize,
    sentence_position: usize,
    previous_kept_period: bool,
    ending: Option<char>,
    trailing: Vec<TokenMark>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `text`.
    pub const fn new(text: &'a str, config: ParsingConfig) -> Self {
        Self {
            text,
            config,
            pos: 0,
            emitted: 0,
            sentence_index: 0,
            paragraph_index: 0,
            sentence_position: 0,
            previous_kept_period: false,
            ending: None,
            trailing: Vec::new(),
            finished: false,
        }
    }

    /// Sentence index after the last token.
    pub const fn sentence_index(&self) -> usize {
        self.sentence_index
    }

    /// Paragraph index after the last token.
    pub const fn paragraph_index(&self) -> usize {
        self.paragraph_index
    }

    /// Ending punctuation of the sentence closed most recently, or of the
    /// final sentence once the stream is exhausted.
    pub const fn last_ending(&self) -> Option<char> {
        self.ending
    }

    /// Punctuation after the last word, available once the stream ends.
    pub fn trailing_punctuation(&self) -> &[TokenMark] {
        &self.trailing
    }

    fn char_at(&self, at: usize) -> Option<char> {
        self.text.get(at..)?.chars().next()
    }

    fn elision_len(&self, at: usize) -> Option<usize> {
        let rest = &self.text[at..];
        let apostrophe = rest.chars().next()?.len_utf8();
        let letters: usize = rest[apostrophe..]
            .chars()
            .take_while(|ch| ch.is_alphabetic())
            .map(char::len_utf8)
            .sum();
        if letters == 0 {
            return None;
        }
        let candidate = format!("'{}", rest[apostrophe..apostrophe + letters].to_lowercase());
        if !ELISIONS.contains(&candidate.as_str()) {
            return None;
        }
        let mut len = apostrophe + letters;
        // rock 'n' roll
        if candidate == "'n"
            && let Some(close) = rest[len..].chars().next()
            && chars::is_apostrophe(close)
        {
            len += close.len_utf8();
        }
        Some(len)
    }

    fn starts_word(&self, at: usize, ch: char, after_space: bool) -> bool {
        if chars::is_word_char(ch) {
            return true;
        }
        if !after_space {
            return false;
        }
        let next = self.char_at(at + ch.len_utf8());
        match ch {
            '#' | '@' => next.is_some_and(chars::is_word_char),
            '&' => next.is_none_or(char::is_whitespace),
            '/' | '~' | '\\' | '.' => address_len(&self.text[at..]).is_some(),
            _ if chars::is_apostrophe(ch) => self.elision_len(at).is_some(),
            _ => false,
        }
    }

    fn scan_gap(&mut self) -> (Gap, Option<usize>) {
        let mut gap = Gap::default();
        let first_word = self.emitted == 0;
        let mut seen_space = first_word;
        // the start of the text counts as the start of a line
        let mut seen_newline = first_word;
        let mut line_has_content = false;
        let mut indent_spaces = 0usize;
        let mut indent_tab = false;
        let mut prev = self.text[..self.pos].chars().next_back();
        let mut at = self.pos;

        while let Some(ch) = self.char_at(at) {
            let after_space = prev.is_none_or(|p| {
                p.is_whitespace() || matches!(p, '(' | '[' | '{') || chars::is_quote(p)
            });
            if self.starts_word(at, ch, after_space) {
                gap.indented = gap.newlines > 0 && (indent_tab || indent_spaces >= 2);
                return (gap, Some(at));
            }
            if ch == '\n' {
                if seen_newline && !line_has_content {
                    gap.blank_lines += 1;
                }
                gap.newlines += 1;
                gap.newline();
                seen_newline = true;
                seen_space = true;
                line_has_content = false;
                indent_spaces = 0;
                indent_tab = false;
            } else if ch.is_whitespace() {
                if !line_has_content {
                    match ch {
                        '\t' => indent_tab = true,
                        ' ' => indent_spaces += 1,
                        _ => {}
                    }
                }
                gap.close_run();
                seen_space = true;
            } else {
                line_has_content = true;
                gap.push(ch, !seen_space);
            }
            prev = Some(ch);
            at += ch.len_utf8();
        }
        self.pos = at;
        (gap, None)
    }

    /// Scan the word at `start`; returns its end, split parts, and whether
    /// it kept a trailing abbreviation period.
    fn scan_word(&self, start: usize) -> (usize, Option<(usize, usize)>, bool) {
        let text = self.text;
        if let Some(len) = address_len(&text[start..]) {
            return (start + len, None, false);
        }
        let Some(first) = self.char_at(start) else {
            return (start, None, false);
        };
        if chars::is_apostrophe(first)
            && let Some(len) = self.elision_len(start)
        {
            return (start + len, None, false);
        }
        if first == '&' {
            return (start + 1, None, false);
        }

        let mut at = start;
        if matches!(first, '#' | '@') {
            at += 1;
        }
        let mut split = None;
        loop {
            while let Some(ch) = self.char_at(at)
                && chars::is_word_char(ch)
            {
                at += ch.len_utf8();
            }
            let Some(ch) = self.char_at(at) else { break };
            let next = self.char_at(at + ch.len_utf8());
            if chars::is_word_joiner(ch) && next.is_some_and(chars::is_word_char) {
                let before = text[..at].chars().next_back();
                let numeric_only = matches!(ch, ',' | ':');
                let both_digits = before.is_some_and(|c| c.is_ascii_digit())
                    && next.is_some_and(|c| c.is_ascii_digit());
                if !numeric_only || both_digits {
                    at += ch.len_utf8();
                    continue;
                }
            }
            if split.is_none()
                && text[start..at].chars().any(char::is_alphabetic)
                && let Some(found) = LINE_END_HYPHEN.find(&text[at..])
                && self
                    .char_at(at + found.end())
                    .is_some_and(char::is_lowercase)
            {
                split = Some((at, at + found.end()));
                at += found.end();
                continue;
            }
            break;
        }

        let stem = &text[start..at];
        match self.char_at(at) {
            Some('.') if split.is_none() && keeps_trailing_period(stem) => (at + 1, split, true),
            Some(ch)
                if chars::is_apostrophe(ch)
                    && !self
                        .char_at(at + ch.len_utf8())
                        .is_some_and(chars::is_word_char)
                    && {
                        let lower = stem.to_lowercase();
                        lower.ends_with('s') || lower.ends_with("in")
                    } =>
            {
                (at + ch.len_utf8(), split, false)
            }
            _ => (at, split, false),
        }
    }

    fn boundary(&self, gap: &Gap, next_lowercase: bool) -> Boundary {
        let config = &self.config;
        let line_break = gap.newlines > 0;
        let paragraph = (gap.blank_lines > 0 && !config.ignore_blank_lines)
            || (line_break && gap.indented && !config.ignore_indenting)
            || (line_break && config.treat_eol_as_eos)
            || gap.newline_after_terminator;
        let terminated = gap.terminator.is_some_and(|run| {
            let held_back = next_lowercase
                && (config.sentence_start_must_be_uppercase
                    || run.ellipsis
                    || (run.quoted && run.exclaims));
            !held_back
        });
        Boundary {
            sentence: paragraph || terminated || gap.newline_after_semicolon,
            paragraph,
        }
    }

    fn close_sentence(&self, gap: &mut Gap, at_paragraph_end: bool) -> Option<char> {
        if let Some(ch) = gap.take_terminator() {
            return Some(ch);
        }
        if self.previous_kept_period && at_paragraph_end {
            return Some('.');
        }
        gap.trailing_mark()
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let (mut gap, start) = self.scan_gap();
        let Some(start) = start else {
            self.ending = if self.emitted == 0 {
                None
            } else {
                self.close_sentence(&mut gap, true)
            };
            self.trailing = gap.marks;
            self.finished = true;
            return None;
        };

        let source = self.text;
        let (end, split, kept_period) = self.scan_word(start);
        let text = &source[start..end];
        let mut leading_blank_lines = gap.blank_lines;

        if self.emitted > 0 {
            let next_lowercase = text
                .chars()
                .find(|ch| ch.is_alphanumeric())
                .is_some_and(char::is_lowercase);
            let boundary = self.boundary(&gap, next_lowercase);
            if boundary.sentence {
                self.ending = self.close_sentence(&mut gap, boundary.paragraph);
                self.sentence_index += 1;
                self.sentence_position = 0;
            }
            if boundary.paragraph {
                self.paragraph_index += 1;
            } else {
                leading_blank_lines = 0;
            }
        }

        let token = Token {
            text,
            start,
            split: split.map(|(hyphen, resume)| (&source[start..hyphen], &source[resume..end])),
            sentence_index: self.sentence_index,
            paragraph_index: self.paragraph_index,
            sentence_position: self.sentence_position,
            is_numeric: is_numeric_word(text),
            punctuation: gap.marks,
            leading_blank_lines,
        };

        self.pos = end;
        self.emitted += 1;
        self.sentence_position += 1;
        self.previous_kept_period = kept_period;
        Some(token)
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        Tokenizer::new(text, ParsingConfig::default())
            .map(|t| t.text.to_string())
            .collect()
    }

    fn sentences(text: &str, config: ParsingConfig) -> Vec<usize> {
        Tokenizer::new(text, config).map(|t| t.sentence_index).collect()
    }

    #[test]
    fn splits_simple_words() {
        assert_eq!(words("The cat, sat."), ["The", "cat", "sat"]);
    }

    #[test]
    fn keeps_word_joiners() {
        assert_eq!(
            words("don't well-known 3.14 1,000 12:30 and/or AT&T"),
            ["don't", "well-known", "3.14", "1,000", "12:30", "and/or", "AT&T"]
        );
        assert_eq!(words("red,green"), ["red", "green"]);
    }

    #[test]
    fn keeps_abbreviation_periods() {
        assert_eq!(words("Dr. Smith met L. L. Bean in the U.S. today"), [
            "Dr.", "Smith", "met", "L.", "L.", "Bean", "in", "the", "U.S.", "today"
        ]);
        assert_eq!(sentences("Dr. Smith arrived.", ParsingConfig::default()), [0, 0, 0]);
    }

    #[test]
    fn addresses_and_tags() {
        assert_eq!(
            words("See https://example.com/a?b=c, or mail joe@example.org. #rust @ferris"),
            ["See", "https://example.com/a?b=c", "or", "mail", "joe@example.org", "#rust", "@ferris"]
        );
        assert_eq!(words("open ~/notes/todo.txt now"), ["open", "~/notes/todo.txt", "now"]);
    }

    #[test]
    fn apostrophes_at_word_edges() {
        assert_eq!(words("'Tis the dogs' bone, goin' on"), [
            "'Tis", "the", "dogs'", "bone", "goin'", "on"
        ]);
        assert_eq!(words("'hello'"), ["hello"]);
        assert_eq!(words("we 'll see"), ["we", "'ll", "see"]);
    }

    #[test]
    fn sentence_breaks() {
        let config = ParsingConfig::default();
        assert_eq!(sentences("One two. Three! Four? five", config), [0, 0, 1, 2, 3]);
        assert_eq!(sentences("Wait... what now", config), [0, 0, 0]);
        assert_eq!(sentences("\"Help!\" she cried.", config), [0, 0, 0]);
        assert_eq!(sentences("First part;\nsecond part", config), [0, 0, 1, 1]);
    }

    #[test]
    fn uppercase_start_required() {
        let config = ParsingConfig {
            sentence_start_must_be_uppercase: true,
            ..ParsingConfig::default()
        };
        assert_eq!(sentences("One. two. Three", config), [0, 0, 1]);
    }

    #[test]
    fn ending_punctuation_is_reported() {
        let mut tokens = Tokenizer::new("Ask me. Why?", ParsingConfig::default());
        tokens.next();
        tokens.next();
        assert_eq!(tokens.last_ending(), None);
        let third = tokens.next().unwrap();
        assert_eq!(third.sentence_index, 1);
        assert_eq!(tokens.last_ending(), Some('.'));
        assert!(third.punctuation.is_empty());
        assert!(tokens.next().is_none());
        assert_eq!(tokens.last_ending(), Some('?'));
        assert!(tokens.trailing_punctuation().is_empty());
    }

    #[test]
    fn unterminated_sentence_reports_colon() {
        let mut tokens = Tokenizer::new("Ingredients:\n\n- eggs", ParsingConfig::default());
        tokens.next();
        let eggs = tokens.next().unwrap();
        assert_eq!(tokens.last_ending(), Some(':'));
        // colon stays with the list so unit counting sees it
        assert_eq!(eggs.punctuation, [
            TokenMark { ch: ':', connected: true },
            TokenMark { ch: '-', connected: false },
        ]);
    }

    #[test]
    fn header_paragraph() {
        let tokens: Vec<_> =
            Tokenizer::new("Header  \n\nNext paragraph", ParsingConfig::default()).collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].paragraph_index, 0);
        assert_eq!(tokens[1].paragraph_index, 1);
        assert_eq!(tokens[1].sentence_index, 1);
        assert_eq!(tokens[1].leading_blank_lines, 1);
    }

    #[test]
    fn current_indices_follow_each_token() {
        let mut tokens = Tokenizer::new("Header  \n\nNext paragraph", ParsingConfig::default());
        assert_eq!((tokens.sentence_index(), tokens.paragraph_index()), (0, 0));
        while let Some(token) = tokens.next() {
            assert_eq!(tokens.sentence_index(), token.sentence_index);
            assert_eq!(tokens.paragraph_index(), token.paragraph_index);
        }
        assert_eq!((tokens.sentence_index(), tokens.paragraph_index()), (1, 1));
    }

    #[test]
    fn paragraph_switches() {
        let text = "one\n\ntwo\n  three\nfour";
        let default: Vec<_> = Tokenizer::new(text, ParsingConfig::default())
            .map(|t| t.paragraph_index)
            .collect();
        assert_eq!(default, [0, 1, 2, 2]);

        let ignoring = ParsingConfig {
            ignore_blank_lines: true,
            ignore_indenting: true,
            ..ParsingConfig::default()
        };
        let flat: Vec<_> = Tokenizer::new(text, ignoring).map(|t| t.paragraph_index).collect();
        assert_eq!(flat, [0, 0, 0, 0]);

        let eol = ParsingConfig {
            treat_eol_as_eos: true,
            ..ParsingConfig::default()
        };
        let lines: Vec<_> = Tokenizer::new(text, eol).map(|t| t.paragraph_index).collect();
        assert_eq!(lines, [0, 1, 2, 3]);
    }

    #[test]
    fn line_break_after_terminator_starts_paragraph() {
        let paragraphs: Vec<_> = Tokenizer::new("Done.\nNext line", ParsingConfig::default())
            .map(|t| t.paragraph_index)
            .collect();
        assert_eq!(paragraphs, [0, 1, 1]);
    }

    #[test]
    fn hyphen_split_words() {
        let tokens: Vec<_> =
            Tokenizer::new("an exam-\nple here", ParsingConfig::default()).collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_split_word());
        assert_eq!(tokens[1].split, Some(("exam", "ple")));
        assert_eq!(tokens[2].paragraph_index, 0);
    }

    #[test]
    fn numeric_words() {
        for word in ["42", "3.14", "1,000", "12:30", "50%", "1st", "1990s", "2-3"] {
            assert!(is_numeric_word(word), "{word}");
        }
        for word in ["abc", "A1", "-", "x2"] {
            assert!(!is_numeric_word(word), "{word}");
        }
    }

    #[test]
    fn positions_and_connected_marks() {
        let tokens: Vec<_> =
            Tokenizer::new("Well, (maybe) not", ParsingConfig::default()).collect();
        assert_eq!(tokens[1].punctuation, [
            TokenMark { ch: ',', connected: true },
            TokenMark { ch: '(', connected: false },
        ]);
        assert_eq!(tokens[2].sentence_position, 2);
        assert_eq!(tokens[2].punctuation, [TokenMark { ch: ')', connected: true }]);
    }

    #[test]
    fn empty_text() {
        let mut tokens = Tokenizer::new("  ...  ", ParsingConfig::default());
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
        assert_eq!(tokens.last_ending(), None);
    }
}
