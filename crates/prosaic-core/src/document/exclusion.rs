//! User-requested exclusions: word classes, phrases and tagged blocks.

use std::collections::HashMap;

use super::Document;

impl Document {
    #[tracing::instrument(skip_all)]
    pub(super) fn apply_exclusions(&mut self) {
        let config = &self.config;
        let (addresses, numerals, proper) = (
            config.exclude_file_addresses,
            config.exclude_numerals,
            config.exclude_proper_nouns,
        );
        if addresses || numerals || proper {
            for word in &mut self.words {
                if (addresses && word.file_address)
                    || (numerals && word.numeric)
                    || (proper && word.proper_noun)
                {
                    word.valid = false;
                }
            }
        }
        self.exclude_phrases();
    }

    /// Invalidate excluded phrases, longest match first.
    fn exclude_phrases(&mut self) {
        let keep_first = self.config.include_excluded_phrase_first_occurrence;
        let mut seen: HashMap<usize, usize> = HashMap::new();
        let mut excluded = Vec::new();

        for sentence in 0..self.sentences.len() {
            let first_word = self.sentences[sentence].first_word;
            let words = self.sentence_strs(sentence);
            let mut offset = 0;
            while offset < words.len() {
                let Some(found) =
                    self.excluded_phrases
                        .match_at(&words, offset, words.len() - offset)
                else {
                    offset += 1;
                    continue;
                };
                let occurrence = seen.entry(found.index).or_default();
                *occurrence += 1;
                if !(keep_first && *occurrence == 1) {
                    let start = first_word + offset;
                    excluded.push(start..start + found.len);
                }
                offset += found.len.max(1);
            }
        }

        for range in excluded {
            for word in &mut self.words[range] {
                word.valid = false;
            }
        }
    }

    /// Invalidate the words between each configured pair of block marks.
    pub(super) fn exclude_blocks(&mut self) {
        let tags = self.config.exclusion_block_tags.clone();
        for tag in tags {
            let mut cursor = 0;
            while let Some(open) = self.punctuation[cursor..]
                .iter()
                .position(|mark| mark.ch == tag.open)
                .map(|offset| cursor + offset)
            {
                let Some(close) = self.punctuation[open + 1..]
                    .iter()
                    .position(|mark| mark.ch == tag.close)
                    .map(|offset| open + 1 + offset)
                else {
                    break;
                };
                let start = {
                    let mark = &self.punctuation[open];
                    if mark.connected { mark.word + 1 } else { mark.word }
                };
                let end = {
                    let mark = &self.punctuation[close];
                    if mark.connected { mark.word + 1 } else { mark.word }
                };
                if start < end {
                    tracing::trace!(open = %tag.open, start, end, "excluding block");
                    for word in &mut self.words[start..end] {
                        word.valid = false;
                    }
                }
                cursor = close + 1;
            }
        }
    }
}
