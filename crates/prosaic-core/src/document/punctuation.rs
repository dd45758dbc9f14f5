//! Punctuation marks between words.

/// A punctuation mark and the word it belongs to.
///
/// A mark that touches the word in front of it is attached to that word
/// with `connected` set; any other mark belongs to the word after it.
/// Marks are stored in source order, which is also word order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationMark {
    /// The character.
    pub ch: char,
    /// Index of the word the mark is attached to.
    pub word: usize,
    /// The mark directly follows `word` (no whitespace in between).
    pub connected: bool,
}

impl PunctuationMark {
    /// Whether the mark sits between `word` and `word + 1`.
    pub const fn follows(&self, word: usize) -> bool {
        (self.word == word && self.connected) || (self.word == word + 1 && !self.connected)
    }
}

/// Index of the first mark attached to a word at or after `word`.
pub(crate) fn first_at_or_after(marks: &[PunctuationMark], word: usize) -> usize {
    marks.partition_point(|mark| mark.word < word)
}

/// Whether any mark lies between `word` and `word + 1`.
pub(crate) fn any_between(marks: &[PunctuationMark], word: usize) -> bool {
    let from = first_at_or_after(marks, word);
    marks[from..]
        .iter()
        .take_while(|mark| mark.word <= word + 1)
        .any(|mark| mark.follows(word))
}

/// Marks in front of `word`.
pub(crate) fn leading(marks: &[PunctuationMark], word: usize) -> impl Iterator<Item = char> + '_ {
    let from = first_at_or_after(marks, word);
    marks[from..]
        .iter()
        .take_while(move |mark| mark.word == word)
        .filter(|mark| !mark.connected)
        .map(|mark| mark.ch)
}

/// Marks directly after `word`.
pub(crate) fn trailing(marks: &[PunctuationMark], word: usize) -> impl Iterator<Item = char> + '_ {
    let from = first_at_or_after(marks, word);
    marks[from..]
        .iter()
        .take_while(move |mark| mark.word == word)
        .filter(|mark| mark.connected)
        .map(|mark| mark.ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(ch: char, word: usize, connected: bool) -> PunctuationMark {
        PunctuationMark { ch, word, connected }
    }

    #[test]
    fn between_words() {
        // "a, (b) c"
        let marks = [mark(',', 0, true), mark('(', 1, false), mark(')', 1, true)];
        assert!(any_between(&marks, 0));
        assert!(any_between(&marks, 1));
        assert!(!any_between(&marks, 2));
        assert_eq!(leading(&marks, 1).collect::<Vec<_>>(), ['(']);
        assert_eq!(trailing(&marks, 1).collect::<Vec<_>>(), [')']);
    }
}
