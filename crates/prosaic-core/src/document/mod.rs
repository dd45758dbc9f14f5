//! The document model and its analysis pipeline.
//!
//! A [`Document`] owns four flat sequences (words, punctuation marks,
//! sentences, paragraphs) that refer to one another by index. Analysis runs
//! in two stages:
//!
//! 1. [`Document::load`] tokenizes the text and builds the sequences.
//! 2. [`Document::finalize`] runs the ordered passes that classify
//!    sentences and paragraphs, apply exclusions, and collect [`Hits`].
//!
//! [`Document::analyze`] does both.
//!
//! ```
//! use prosaic_core::Document;
//! use prosaic_core::config::AnalysisConfig;
//!
//! let mut doc = Document::new(AnalysisConfig::default());
//! doc.analyze("The report was written by the committee. It was the the best.");
//! assert_eq!(doc.counts().valid_sentences, 2);
//! assert_eq!(doc.hits().duplicate_words, [10]);
//! assert_eq!(doc.hits().passive_voice.len(), 1);
//! ```

mod counts;
mod exclusion;
mod grammar;
mod hits;
mod load;
mod overused;
mod paragraph;
mod phrase_search;
mod proper_nouns;
mod punctuation;
mod sentence;
mod structure;
mod suppression;
mod tagging;
mod word;

use std::fmt;
use std::sync::Arc;

pub use counts::Counts;
pub use grammar::{article_mismatch, duplicate_words, passive_span};
pub use hits::{Hits, KnownPhraseHit, Ngram, OverusedWord, WordSpan};
pub use paragraph::ParagraphInfo;
pub use punctuation::PunctuationMark;
pub use sentence::{SentenceInfo, SentenceType};
pub use word::Word;

use crate::collaborators::{
    EstimatingSyllabizer, SpellJudge, StaticList, Stemmer, Syllabizer, WordList, WordPredicate,
};
use crate::config::AnalysisConfig;
use crate::phrases::{PhraseCollection, PhraseKind, PhraseList};
use crate::predicates::{Conjunctions, Language, NegatingWords, PersonalPronouns};
use crate::word_lists::{KNOWN_PERSONAL, STOP_WORDS};

/// An analyzed text.
pub struct Document {
    config: AnalysisConfig,

    syllabizer: Arc<dyn Syllabizer>,
    stemmer: Option<Arc<dyn Stemmer>>,
    conjunctions: Arc<dyn WordPredicate>,
    negators: Arc<dyn WordPredicate>,
    pronouns: Arc<dyn WordPredicate>,
    known_phrases: Arc<dyn PhraseCollection>,
    excluded_phrases: Arc<dyn PhraseCollection>,
    dictionary: Option<Arc<dyn SpellJudge>>,
    known_proper: Option<Arc<dyn WordList>>,
    known_personal: Arc<dyn WordList>,
    stop_words: Arc<dyn WordList>,

    words: Vec<Word>,
    punctuation: Vec<PunctuationMark>,
    sentences: Vec<SentenceInfo>,
    paragraphs: Vec<ParagraphInfo>,
    hits: Hits,
    counts: Counts,
    finalized: bool,
}

impl Document {
    /// Create an empty English document with the built-in collaborators.
    pub fn new(config: AnalysisConfig) -> Self {
        let excluded = PhraseList::from_phrases(&config.excluded_phrases, PhraseKind::Wordy);
        Self {
            config,
            syllabizer: Arc::new(EstimatingSyllabizer),
            stemmer: None,
            conjunctions: Arc::new(Conjunctions(Language::English)),
            negators: Arc::new(NegatingWords(Language::English)),
            pronouns: Arc::new(PersonalPronouns(Language::English)),
            known_phrases: Arc::new(PhraseList::builtin()),
            excluded_phrases: Arc::new(excluded),
            dictionary: None,
            known_proper: None,
            known_personal: Arc::new(StaticList(&KNOWN_PERSONAL)),
            stop_words: Arc::new(StaticList(&STOP_WORDS)),
            words: Vec::new(),
            punctuation: Vec::new(),
            sentences: Vec::new(),
            paragraphs: Vec::new(),
            hits: Hits::default(),
            counts: Counts::default(),
            finalized: false,
        }
    }

    /// Use the conjunction, negator and pronoun sets of `language`.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.conjunctions = Arc::new(Conjunctions(language));
        self.negators = Arc::new(NegatingWords(language));
        self.pronouns = Arc::new(PersonalPronouns(language));
        self
    }

    /// Count syllables with `syllabizer`.
    #[must_use]
    pub fn with_syllabizer(mut self, syllabizer: Arc<dyn Syllabizer>) -> Self {
        self.syllabizer = syllabizer;
        self
    }

    /// Stem words with `stemmer` (needed for stemmed overused-word counts).
    #[must_use]
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Classify coordinating conjunctions with `predicate`.
    #[must_use]
    pub fn with_conjunctions(mut self, predicate: Arc<dyn WordPredicate>) -> Self {
        self.conjunctions = predicate;
        self
    }

    /// Classify negating words with `predicate`.
    #[must_use]
    pub fn with_negators(mut self, predicate: Arc<dyn WordPredicate>) -> Self {
        self.negators = predicate;
        self
    }

    /// Classify personal pronouns with `predicate`.
    #[must_use]
    pub fn with_pronouns(mut self, predicate: Arc<dyn WordPredicate>) -> Self {
        self.pronouns = predicate;
        self
    }

    /// Look up known phrases in `phrases` instead of the built-in catalog.
    #[must_use]
    pub fn with_known_phrases(mut self, phrases: Arc<dyn PhraseCollection>) -> Self {
        self.known_phrases = phrases;
        self
    }

    /// Exclude `phrases` instead of the configured `excluded_phrases`.
    #[must_use]
    pub fn with_excluded_phrases(mut self, phrases: Arc<dyn PhraseCollection>) -> Self {
        self.excluded_phrases = phrases;
        self
    }

    /// Spell-check with `dictionary`; also enables personal-noun detection
    /// for non-dictionary words and hyphen-split word repair.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Arc<dyn SpellJudge>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Words that are always proper nouns.
    #[must_use]
    pub fn with_known_proper(mut self, list: Arc<dyn WordList>) -> Self {
        self.known_proper = Some(list);
        self
    }

    /// Proper nouns that are always personal.
    #[must_use]
    pub fn with_known_personal(mut self, list: Arc<dyn WordList>) -> Self {
        self.known_personal = list;
        self
    }

    /// Stop words for overused-word, n-gram and negation detection.
    #[must_use]
    pub fn with_stop_words(mut self, list: Arc<dyn WordList>) -> Self {
        self.stop_words = list;
        self
    }

    /// Load and finalize `text`.
    pub fn analyze(&mut self, text: &str) {
        self.load(text);
        self.finalize();
    }

    /// Clear everything for reuse.
    pub fn reset(&mut self) {
        self.words.clear();
        self.punctuation.clear();
        self.sentences.clear();
        self.paragraphs.clear();
        self.hits.clear();
        self.counts = Counts::default();
        self.finalized = false;
    }

    /// Run the analysis passes over the loaded text.
    ///
    /// Does nothing for an empty document or one already finalized.
    #[tracing::instrument(skip_all, fields(words = self.words.len(), sentences = self.sentences.len()))]
    pub fn finalize(&mut self) {
        if self.words.is_empty() || self.finalized {
            return;
        }
        self.tag_words();
        self.tag_contractions();
        self.classify_incomplete_sentences();
        self.promote_semicolon_sentences();
        self.reclassify_by_length();
        self.smooth_runs();
        self.classify_paragraphs();
        if self.config.exclude_copyright_notices {
            self.exclude_copyright_notices();
        }
        if self.config.exclude_citations {
            self.exclude_citations();
        }
        self.propagate_validity();
        self.tag_sentence_starts();
        self.detect_proper_nouns();
        self.find_overused_words();
        self.apply_exclusions();
        self.exclude_blocks();
        self.scan_grammar();
        if self.config.search_negated_phrases {
            self.find_negated_phrases();
        }
        if self.config.search_proper_phrases {
            self.find_proper_phrases();
        }
        if !self.config.ngram_sizes.is_empty() {
            self.find_ngrams();
        }
        self.count();
        self.finalized = true;

        tracing::debug!(
            valid_words = self.counts.valid_words,
            valid_sentences = self.counts.valid_sentences,
            valid_paragraphs = self.counts.valid_paragraphs,
            "document finalized"
        );
    }

    /// Analysis settings.
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Whether [`Document::finalize`] has run.
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// All words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All punctuation marks except sentence terminators.
    pub fn punctuation(&self) -> &[PunctuationMark] {
        &self.punctuation
    }

    /// All sentences.
    pub fn sentences(&self) -> &[SentenceInfo] {
        &self.sentences
    }

    /// All paragraphs.
    pub fn paragraphs(&self) -> &[ParagraphInfo] {
        &self.paragraphs
    }

    /// Findings of the analysis.
    pub const fn hits(&self) -> &Hits {
        &self.hits
    }

    /// Aggregate counts.
    pub const fn counts(&self) -> &Counts {
        &self.counts
    }

    /// The phrase behind a [`KnownPhraseHit`].
    pub fn known_phrase(&self, hit: &KnownPhraseHit) -> Option<&crate::phrases::Phrase> {
        self.known_phrases.phrase(hit.phrase)
    }

    /// Words of sentence `index`.
    pub fn sentence_words(&self, index: usize) -> &[Word] {
        self.sentences
            .get(index)
            .map_or(&[], |sentence| &self.words[sentence.words()])
    }

    /// Words of `span` joined by single spaces.
    pub fn span_text(&self, span: WordSpan) -> String {
        join_words(self.words.get(span.range()).unwrap_or_default())
    }

    /// Words of sentence `index` joined by single spaces.
    pub fn sentence_text(&self, index: usize) -> String {
        join_words(self.sentence_words(index))
    }

    /// Text of the words in a sentence, for phrase lookups.
    fn sentence_strs(&self, index: usize) -> Vec<&str> {
        self.sentence_words(index)
            .iter()
            .map(|word| word.text.as_str())
            .collect()
    }
}

fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("config", &self.config)
            .field("words", &self.words.len())
            .field("sentences", &self.sentences.len())
            .field("paragraphs", &self.paragraphs.len())
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed(text: &str) -> Document {
        let mut doc = Document::new(AnalysisConfig::default());
        doc.analyze(text);
        doc
    }

    fn assert_structure(doc: &Document) {
        let words: usize = doc.sentences().iter().map(|s| s.word_count).sum();
        assert_eq!(words, doc.words().len());
        let sentences: usize = doc.paragraphs().iter().map(ParagraphInfo::sentence_count).sum();
        assert_eq!(sentences, doc.sentences().len());

        let mut next_word = 0;
        for (index, sentence) in doc.sentences().iter().enumerate() {
            assert_eq!(sentence.first_word, next_word);
            for word in sentence.words() {
                assert_eq!(doc.words()[word].sentence, index);
            }
            next_word = sentence.last_word + 1;
        }
        let mut next_sentence = 0;
        for (index, paragraph) in doc.paragraphs().iter().enumerate() {
            assert_eq!(paragraph.first_sentence, next_sentence);
            for sentence in paragraph.sentences() {
                let first = doc.sentences()[sentence].first_word;
                assert_eq!(doc.words()[first].paragraph, index);
            }
            next_sentence = paragraph.last_sentence + 1;
        }
        assert!(doc.punctuation().windows(2).all(|w| w[0].word <= w[1].word));
    }

    #[test]
    fn empty_text_is_an_empty_document() {
        let doc = analyzed("");
        assert!(doc.words().is_empty());
        assert!(doc.sentences().is_empty());
        assert!(doc.paragraphs().is_empty());
        assert_eq!(*doc.counts(), Counts::default());
        assert!(!doc.is_finalized());
    }

    #[test]
    fn ranges_are_contiguous() {
        let doc = analyzed(
            "Chapter One\n\nIt was a dark night. The wind howled; the rain fell.\n\n\
             Shopping:\n- eggs\n- milk\n- bread\n\nThe end? Maybe… not.",
        );
        assert_structure(&doc);
        assert_eq!(doc.counts().words, doc.words().len());
    }

    #[test]
    fn load_is_idempotent() {
        let text = "Dr. Smith went to Washington. He was seen by the press! \
                    Was he? The the answer is unclear.\n\nReferences\n\nSmith (2020).";
        let mut doc = Document::new(AnalysisConfig::default());
        doc.analyze(text);
        let words = doc.words().to_vec();
        let sentences = doc.sentences().to_vec();
        let hits = doc.hits().clone();
        doc.analyze(text);
        assert_eq!(doc.words(), words.as_slice());
        assert_eq!(doc.sentences(), sentences.as_slice());
        assert_eq!(*doc.hits(), hits);
    }

    #[test]
    fn header_then_paragraph() {
        let doc = analyzed("Header  \n\nNext paragraph");
        assert_eq!(doc.paragraphs().len(), 2);
        assert_eq!(doc.words()[1].paragraph, 1);
        let first = &doc.paragraphs()[0];
        assert_eq!(first.sentence_count(), 1);
        assert_eq!(first.kind, SentenceType::Header);
        assert_eq!(doc.sentences()[0].kind, SentenceType::Header);
        assert_eq!(doc.paragraphs()[1].leading_blank_lines, 1);
    }

    #[test]
    fn excluded_phrases_invalidate_only_matches() {
        let config = AnalysisConfig {
            excluded_phrases: vec!["star wars".into(), "for real".into()],
            ..AnalysisConfig::default()
        };
        let mut doc = Document::new(config);
        doc.analyze("The Star Wars prequels were awful star. Wars prequels were bad, for real.");

        let invalid: Vec<usize> = doc
            .words()
            .iter()
            .enumerate()
            .filter(|(_, word)| !word.valid)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(invalid, [1, 2, 11, 12]);

        let sentences = doc.sentences();
        assert!(sentences[0].valid);
        assert_eq!((sentences[0].valid_word_count, sentences[0].word_count), (5, 7));
        assert!(sentences[1].valid);
        assert_eq!((sentences[1].valid_word_count, sentences[1].word_count), (4, 6));
    }

    #[test]
    fn first_excluded_occurrence_can_be_kept() {
        let config = AnalysisConfig {
            excluded_phrases: vec!["star wars".into()],
            include_excluded_phrase_first_occurrence: true,
            ..AnalysisConfig::default()
        };
        let mut doc = Document::new(config);
        doc.analyze("I loved Star Wars. Then Star Wars got old.");
        let invalid: Vec<usize> = doc
            .words()
            .iter()
            .enumerate()
            .filter(|(_, word)| !word.valid)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(invalid, [5, 6]);
    }

    #[test]
    fn finalize_runs_once() {
        let mut doc = analyzed("One sentence here.");
        let counts = *doc.counts();
        doc.finalize();
        assert_eq!(*doc.counts(), counts);
        assert!(doc.is_finalized());
    }

    #[test]
    fn reset_clears_everything() {
        let mut doc = analyzed("Some words. More words.");
        doc.reset();
        assert!(doc.words().is_empty());
        assert!(doc.punctuation().is_empty());
        assert_eq!(*doc.hits(), Hits::default());
    }

    #[test]
    fn sentence_text_joins_words() {
        let doc = analyzed("Hello, big world.");
        assert_eq!(doc.sentence_text(0), "Hello big world");
        assert!(doc.sentence_words(7).is_empty());
    }

    #[test]
    fn custom_collaborators() {
        let dictionary = |word: &str| word != "teh";
        let mut doc = Document::new(AnalysisConfig::default())
            .with_dictionary(Arc::new(dictionary))
            .with_syllabizer(Arc::new(|_: &str| 1_usize));
        doc.analyze("I saw teh cat.");
        assert_eq!(doc.hits().misspellings, [2]);
        assert_eq!(doc.counts().syllables, 4);
    }
}
