//! Serializable summaries of an analyzed [`Document`].
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and the `--schema` dump. Word and sentence
//! references are indices into the document's sequences; every finding
//! also carries its matched text so the report stands on its own.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::{Counts, Document, SentenceType, WordSpan};
use crate::error::{AnalysisError, AnalysisResult};
use crate::phrases::PhraseKind;

/// All available check names.
pub const ALL_CHECKS: &[&str] = &[
    "sentences",
    "known_phrases",
    "duplicates",
    "articles",
    "passive",
    "spelling",
    "overused",
    "conjunction_starts",
    "lowercase_starts",
    "negated",
    "proper_phrases",
    "ngrams",
];

/// Reject check names that are not in [`ALL_CHECKS`].
pub fn validate_checks(checks: &[String]) -> AnalysisResult<()> {
    match checks.iter().find(|name| !ALL_CHECKS.contains(&name.as_str())) {
        Some(name) => Err(AnalysisError::UnknownCheck {
            name: name.clone(),
            available: ALL_CHECKS.join(", "),
        }),
        None => Ok(()),
    }
}

/// Full report over a finalized document.
///
/// Sections left out by the check selection are `None` and omitted from
/// the JSON. The optional heuristics (`negated`, `proper_phrases`,
/// `ngrams`) only have entries when enabled in the analysis config.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReport {
    /// Aggregate counts.
    pub counts: Counts,
    /// Per-sentence summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<SentenceSummary>>,
    /// Wordy, cliché, redundant and error phrases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_phrases: Option<Vec<PhraseFinding>>,
    /// Adjacent duplicate words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_words: Option<Vec<WordFinding>>,
    /// Articles that do not fit the following word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatched_articles: Option<Vec<WordFinding>>,
    /// Passive constructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_voice: Option<Vec<SpanFinding>>,
    /// Words the dictionary rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misspellings: Option<Vec<WordFinding>>,
    /// Words repeated within one sentence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overused_words: Option<Vec<OverusedFinding>>,
    /// Sentences opening with a coordinating conjunction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjunction_starts: Option<Vec<SentenceFinding>>,
    /// Sentences opening with a lowercase word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase_starts: Option<Vec<SentenceFinding>>,
    /// Negated phrases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated_phrases: Option<Vec<SpanFinding>>,
    /// Proper-noun phrases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proper_phrases: Option<Vec<SpanFinding>>,
    /// Recurring n-grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrams: Option<Vec<NgramFinding>>,
}

// -- Findings ---------------------------------------------------------------

/// One sentence of the document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SentenceSummary {
    /// Sentence index.
    pub index: usize,
    /// Paragraph index.
    pub paragraph: usize,
    /// Classification.
    pub kind: SentenceType,
    /// Counted by the analysis.
    pub valid: bool,
    /// Number of words.
    pub word_count: usize,
    /// Number of valid words.
    pub valid_word_count: usize,
    /// Number of clauses.
    pub unit_count: usize,
    /// Ending punctuation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending: Option<char>,
    /// Words joined by single spaces.
    pub text: String,
}

/// A single flagged word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFinding {
    /// Word index.
    pub word: usize,
    /// Sentence index.
    pub sentence: usize,
    /// The word.
    pub text: String,
}

/// A flagged run of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpanFinding {
    /// Index of the first word.
    pub first_word: usize,
    /// Number of words.
    pub len: usize,
    /// Sentence index.
    pub sentence: usize,
    /// The words joined by single spaces.
    pub text: String,
}

/// A known phrase found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhraseFinding {
    /// Where the phrase was found.
    #[serde(flatten)]
    pub span: SpanFinding,
    /// Category of the phrase.
    pub kind: PhraseKind,
    /// Suggested replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A word form repeated within one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OverusedFinding {
    /// Sentence index.
    pub sentence: usize,
    /// The shared (possibly stemmed) form.
    pub stem: String,
    /// Every word index with that form.
    pub words: Vec<usize>,
}

/// A sentence flagged as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceFinding {
    /// Sentence index.
    pub sentence: usize,
    /// Words joined by single spaces.
    pub text: String,
}

/// A recurring word sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NgramFinding {
    /// Normalized text.
    pub text: String,
    /// Window size in words.
    pub size: usize,
    /// First word of every occurrence.
    pub occurrences: Vec<usize>,
}

// -- Construction -----------------------------------------------------------

impl DocumentReport {
    /// Summarize `doc`, keeping only the sections named in `checks`.
    ///
    /// `checks` of `None` keeps every section. Unknown names fail with
    /// [`AnalysisError::UnknownCheck`].
    #[tracing::instrument(skip_all, fields(checks = ?checks))]
    pub fn from_document(doc: &Document, checks: Option<&[String]>) -> AnalysisResult<Self> {
        if let Some(list) = checks {
            validate_checks(list)?;
        }
        let enabled: HashSet<&str> = checks.map_or_else(
            || ALL_CHECKS.iter().copied().collect(),
            |list| list.iter().map(String::as_str).collect(),
        );
        let section = |name: &str| enabled.contains(name);
        let hits = doc.hits();

        let word = |index: usize| WordFinding {
            word: index,
            sentence: doc.words()[index].sentence,
            text: doc.words()[index].text.clone(),
        };
        let span = |span: WordSpan| SpanFinding {
            first_word: span.first_word,
            len: span.len,
            sentence: doc.words()[span.first_word].sentence,
            text: doc.span_text(span),
        };
        let sentence = |index: usize| SentenceFinding {
            sentence: index,
            text: doc.sentence_text(index),
        };

        let report = Self {
            counts: *doc.counts(),
            sentences: section("sentences").then(|| sentence_summaries(doc)),
            known_phrases: section("known_phrases").then(|| {
                hits.known_phrases
                    .iter()
                    .map(|hit| PhraseFinding {
                        span: span(hit.span),
                        kind: hit.kind,
                        suggestion: doc
                            .known_phrase(hit)
                            .map(|phrase| phrase.suggestion.clone())
                            .filter(|suggestion| !suggestion.is_empty()),
                    })
                    .collect()
            }),
            duplicate_words: section("duplicates")
                .then(|| hits.duplicate_words.iter().copied().map(word).collect()),
            mismatched_articles: section("articles")
                .then(|| hits.mismatched_articles.iter().copied().map(word).collect()),
            passive_voice: section("passive")
                .then(|| hits.passive_voice.iter().copied().map(span).collect()),
            misspellings: section("spelling")
                .then(|| hits.misspellings.iter().copied().map(word).collect()),
            overused_words: section("overused").then(|| {
                hits.overused_words
                    .iter()
                    .map(|found| OverusedFinding {
                        sentence: found.sentence,
                        stem: found.stem.clone(),
                        words: found.words.clone(),
                    })
                    .collect()
            }),
            conjunction_starts: section("conjunction_starts")
                .then(|| hits.conjunction_starts.iter().copied().map(sentence).collect()),
            lowercase_starts: section("lowercase_starts")
                .then(|| hits.lowercase_starts.iter().copied().map(sentence).collect()),
            negated_phrases: section("negated")
                .then(|| hits.negated_phrases.iter().copied().map(span).collect()),
            proper_phrases: section("proper_phrases")
                .then(|| hits.proper_phrases.iter().copied().map(span).collect()),
            ngrams: section("ngrams").then(|| {
                hits.ngrams
                    .iter()
                    .map(|ngram| NgramFinding {
                        text: ngram.text.clone(),
                        size: ngram.size,
                        occurrences: ngram.occurrences.clone(),
                    })
                    .collect()
            }),
        };

        tracing::debug!(
            known_phrases = hits.known_phrases.len(),
            passive = hits.passive_voice.len(),
            "report built"
        );
        Ok(report)
    }

    /// Number of findings across every included section.
    pub fn finding_count(&self) -> usize {
        fn len<T>(section: Option<&Vec<T>>) -> usize {
            section.map_or(0, Vec::len)
        }
        len(self.known_phrases.as_ref())
            + len(self.duplicate_words.as_ref())
            + len(self.mismatched_articles.as_ref())
            + len(self.passive_voice.as_ref())
            + len(self.misspellings.as_ref())
            + len(self.overused_words.as_ref())
            + len(self.conjunction_starts.as_ref())
            + len(self.lowercase_starts.as_ref())
    }
}

fn sentence_summaries(doc: &Document) -> Vec<SentenceSummary> {
    doc.sentences()
        .iter()
        .enumerate()
        .map(|(index, info)| SentenceSummary {
            index,
            paragraph: doc.words()[info.first_word].paragraph,
            kind: info.kind,
            valid: info.valid,
            word_count: info.word_count,
            valid_word_count: info.valid_word_count,
            unit_count: info.unit_count,
            ending: info.ending,
            text: doc.sentence_text(index),
        })
        .collect()
}
