//! Building the word, punctuation, sentence and paragraph sequences.

use super::{Document, ParagraphInfo, PunctuationMark, SentenceInfo, Word};
use crate::tokenizer::{Token, TokenMark, Tokenizer};

impl Document {
    /// Tokenize `text` into a fresh set of sequences.
    ///
    /// Replaces whatever the document held before. Flags other than
    /// `numeric` are left for [`Document::finalize`].
    #[tracing::instrument(skip_all, fields(bytes = text.len()))]
    pub fn load(&mut self, text: &str) {
        self.reset();

        let estimated_words = text.len() / 5;
        self.words.reserve(estimated_words);
        self.punctuation.reserve(estimated_words / 5);
        self.sentences.reserve(estimated_words / 20);
        self.paragraphs.reserve(estimated_words / 80);

        let mut tokens = Tokenizer::new(text, self.config.parsing);
        let mut sentence_start = 0;
        let mut paragraph_start = 0;
        let mut blank_lines = 0;
        let mut current = (0, 0);

        while let Some(token) = tokens.next() {
            let index = self.words.len();
            let position = (tokens.sentence_index(), tokens.paragraph_index());
            if index == 0 {
                blank_lines = token.leading_blank_lines;
            } else if position.0 != current.0 {
                self.sentences
                    .push(SentenceInfo::new(sentence_start, index - 1, tokens.last_ending()));
                sentence_start = index;
                if position.1 != current.1 {
                    self.close_paragraph(paragraph_start, blank_lines);
                    paragraph_start = self.sentences.len();
                    blank_lines = token.leading_blank_lines;
                }
            }
            current = position;

            self.attach_marks(&token.punctuation, index);
            let word = self.make_word(&token, index);
            self.words.push(word);
        }

        if self.words.is_empty() {
            return;
        }
        let last = self.words.len() - 1;
        let trailing: Vec<TokenMark> = tokens.trailing_punctuation().to_vec();
        for mark in trailing {
            self.push_mark(mark.ch, last, true);
        }
        self.sentences
            .push(SentenceInfo::new(sentence_start, last, tokens.last_ending()));
        self.close_paragraph(paragraph_start, blank_lines);

        tracing::debug!(
            words = self.words.len(),
            marks = self.punctuation.len(),
            sentences = self.sentences.len(),
            paragraphs = self.paragraphs.len(),
            "document loaded"
        );
    }

    fn close_paragraph(&mut self, first_sentence: usize, blank_lines: usize) {
        let last_sentence = self.sentences.len() - 1;
        self.paragraphs
            .push(ParagraphInfo::new(first_sentence, last_sentence, blank_lines));
    }

    /// Marks touching the previous word go to it; the rest belong to the
    /// word at `index`. Connected marks are pushed first to keep the
    /// sequence in word order.
    fn attach_marks(&mut self, marks: &[TokenMark], index: usize) {
        if index > 0 {
            for mark in marks.iter().filter(|mark| mark.connected) {
                self.push_mark(mark.ch, index - 1, true);
            }
        }
        for mark in marks.iter().filter(|mark| !mark.connected || index == 0) {
            self.push_mark(mark.ch, index, false);
        }
    }

    fn push_mark(&mut self, ch: char, word: usize, connected: bool) {
        self.punctuation.push(PunctuationMark { ch, word, connected });
        // marks for the word being built are counted in make_word
        if let Some(owner) = self.words.get_mut(word) {
            owner.punctuation_count += 1;
        }
    }

    fn make_word(&self, token: &Token<'_>, index: usize) -> Word {
        let text = match token.split {
            Some((before, after)) => self.rejoin(before, after),
            None => token.text.to_string(),
        };
        let numeric = if token.is_split_word() {
            crate::tokenizer::is_numeric_word(&text)
        } else {
            token.is_numeric
        };
        let punctuation_count = token
            .punctuation
            .iter()
            .filter(|mark| !mark.connected || index == 0)
            .count();
        Word {
            syllables: self.syllabizer.count(&text),
            start: token.start,
            end: token.start + token.text.len(),
            sentence: token.sentence_index,
            position: token.sentence_position,
            paragraph: token.paragraph_index,
            punctuation_count,
            numeric,
            valid: true,
            text,
            ..Word::default()
        }
    }

    /// A word broken across lines keeps its hyphen only when the
    /// dictionary knows the hyphenated form and not the closed one.
    fn rejoin(&self, before: &str, after: &str) -> String {
        let joined = format!("{before}{after}");
        let Some(dictionary) = &self.dictionary else {
            return joined;
        };
        let hyphenated = format!("{before}-{after}");
        if dictionary.is_correct(&hyphenated) && !dictionary.is_correct(&joined) {
            hyphenated
        } else {
            joined
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::collaborators::WordSet;
    use crate::config::AnalysisConfig;
    use crate::document::SentenceType;

    fn loaded(text: &str) -> Document {
        let mut doc = Document::new(AnalysisConfig::default());
        doc.load(text);
        doc
    }

    #[test]
    fn builds_sequences() {
        let doc = loaded("One two. Three four!\n\nFive six");
        assert_eq!(doc.words().len(), 6);
        assert_eq!(doc.sentences().len(), 3);
        assert_eq!(doc.paragraphs().len(), 2);

        let sentences = doc.sentences();
        assert_eq!(sentences[0].ending, Some('.'));
        assert_eq!(sentences[1].ending, Some('!'));
        assert_eq!(sentences[2].ending, None);
        assert_eq!(sentences[2].kind, SentenceType::Incomplete);
        assert_eq!(doc.paragraphs()[0].sentences(), 0..=1);
        assert_eq!(doc.paragraphs()[1].sentences(), 2..=2);
        assert_eq!(doc.words()[4].paragraph, 1);
        assert_eq!(doc.words()[3].position, 1);
    }

    #[test]
    fn words_carry_source_spans() {
        let text = "Hello,  world";
        let doc = loaded(text);
        let world = &doc.words()[1];
        assert_eq!(&text[world.span()], "world");
    }

    #[test]
    fn marks_attach_to_their_side() {
        // "a, (b) c": ',' and ')' touch the word before, '(' opens b
        let doc = loaded("a, (b) c");
        let marks = doc.punctuation();
        assert_eq!(marks.len(), 3);
        assert_eq!((marks[0].ch, marks[0].word, marks[0].connected), (',', 0, true));
        assert_eq!((marks[1].ch, marks[1].word, marks[1].connected), ('(', 1, false));
        assert_eq!((marks[2].ch, marks[2].word, marks[2].connected), (')', 1, true));
        assert_eq!(doc.words()[0].punctuation_count, 1);
        assert_eq!(doc.words()[1].punctuation_count, 2);
        assert_eq!(doc.words()[2].punctuation_count, 0);
    }

    #[test]
    fn terminators_are_not_marks() {
        let doc = loaded("Stop. Go!");
        assert!(doc.punctuation().is_empty());
    }

    #[test]
    fn trailing_marks_go_to_last_word() {
        let doc = loaded("He said \"go.\"");
        let last = doc.words().len() - 1;
        assert!(doc.punctuation().iter().any(|m| m.word == last && m.ch == '"'));
    }

    #[test]
    fn split_words_rejoin() {
        let doc = loaded("An exam-\nple of this.");
        assert_eq!(doc.words()[1].text, "example");
        assert_eq!(doc.words().len(), 4);
    }

    #[test]
    fn split_words_keep_known_hyphen() {
        let dictionary = WordSet::from_words(["well-known", "of", "this"]);
        let mut doc = Document::new(AnalysisConfig::default()).with_dictionary(Arc::new(dictionary));
        doc.load("A well-\nknown fact.");
        assert_eq!(doc.words()[1].text, "well-known");
    }

    #[test]
    fn numeric_words_are_flagged() {
        let doc = loaded("In 1990 about 3.5 million");
        assert!(doc.words()[1].numeric);
        assert!(doc.words()[3].numeric);
        assert!(!doc.words()[2].numeric);
    }
}
