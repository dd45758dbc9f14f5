//! Command implementations.

use std::sync::Arc;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use prosaic_core::collaborators::{SuffixStemmer, WordSet};
use prosaic_core::config::{AnalysisConfig, Config};
use prosaic_core::error::check_input_size;
use prosaic_core::phrases::{PhraseKind, PhraseList};
use prosaic_core::predicates::Language;
use prosaic_core::{Document, markdown};

pub mod analyze;
pub mod info;
pub mod sentences;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before the file is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_input_size(size, max_bytes).with_context(|| format!("refusing to analyze {path}"))?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read `path` as analysis input, flattening markdown files.
pub fn load_text(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if matches!(path.extension(), Some("md" | "markdown")) {
        return Ok(markdown::flatten(&content));
    }
    Ok(content)
}

/// Engine switches shared by every command that analyzes a file.
///
/// Flags only turn features on; anything already enabled in the config
/// stays enabled.
#[derive(Args, Debug, Default, Clone)]
pub struct EngineArgs {
    /// Broaden copyright, citation and list-item detection
    #[arg(long)]
    pub aggressive: bool,

    /// Exclude a trailing bibliography
    #[arg(long)]
    pub exclude_citations: bool,

    /// Exclude trailing copyright and trademark notices
    #[arg(long)]
    pub exclude_copyright: bool,

    /// Exclude numerals
    #[arg(long)]
    pub exclude_numerals: bool,

    /// Exclude proper nouns
    #[arg(long)]
    pub exclude_proper_nouns: bool,

    /// Exclude URLs, e-mail addresses and file paths
    #[arg(long)]
    pub exclude_file_addresses: bool,

    /// File of phrases to exclude, one per line
    #[arg(long, value_name = "FILE")]
    pub excluded_phrases: Option<Utf8PathBuf>,

    /// File of extra known phrases (`phrase[<TAB>kind[<TAB>suggestion]]`)
    #[arg(long, value_name = "FILE")]
    pub known_phrases: Option<Utf8PathBuf>,

    /// Word list for spell checking, one word per line
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Words that are always proper nouns, one per line
    #[arg(long, value_name = "FILE")]
    pub proper_nouns: Option<Utf8PathBuf>,

    /// Report recurring n-grams of these sizes (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "N")]
    pub ngram: Vec<usize>,

    /// Look for negated phrases
    #[arg(long)]
    pub negated: bool,

    /// Look for runs of proper nouns
    #[arg(long)]
    pub proper_phrases: bool,

    /// Count overused words by stem
    #[arg(long)]
    pub stem: bool,

    /// Treat every line break as the end of a sentence
    #[arg(long)]
    pub eol_as_eos: bool,

    /// Language of the text (overrides config)
    #[arg(long, value_enum)]
    pub language: Option<Language>,
}

impl EngineArgs {
    /// Layer the flags over `analysis`.
    pub fn apply(&self, analysis: &mut AnalysisConfig) {
        analysis.aggressive_exclusion |= self.aggressive;
        analysis.exclude_citations |= self.exclude_citations;
        analysis.exclude_copyright_notices |= self.exclude_copyright;
        analysis.exclude_numerals |= self.exclude_numerals;
        analysis.exclude_proper_nouns |= self.exclude_proper_nouns;
        analysis.exclude_file_addresses |= self.exclude_file_addresses;
        analysis.search_negated_phrases |= self.negated;
        analysis.search_proper_phrases |= self.proper_phrases;
        analysis.stem_overused_words |= self.stem;
        analysis.parsing.treat_eol_as_eos |= self.eol_as_eos;
        if !self.ngram.is_empty() {
            analysis.ngram_sizes.clone_from(&self.ngram);
        }
    }

    /// Build an empty document configured from `config` and these flags.
    #[tracing::instrument(skip_all)]
    pub fn build_document(&self, config: &Config) -> anyhow::Result<Document> {
        let mut analysis = config.analysis.clone();
        self.apply(&mut analysis);
        let stem = analysis.stem_overused_words;

        let excluded = match &self.excluded_phrases {
            Some(path) => {
                let mut list =
                    PhraseList::from_phrases(&analysis.excluded_phrases, PhraseKind::Wordy);
                list.extend(PhraseList::load(path, PhraseKind::Wordy)?);
                Some(list)
            }
            None => None,
        };

        let mut doc =
            Document::new(analysis).with_language(self.language.unwrap_or(config.language));
        if stem {
            doc = doc.with_stemmer(Arc::new(SuffixStemmer));
        }
        if let Some(list) = excluded {
            doc = doc.with_excluded_phrases(Arc::new(list));
        }
        if let Some(path) = &self.known_phrases {
            let mut list = PhraseList::builtin();
            list.extend(PhraseList::load(path, PhraseKind::Wordy)?);
            doc = doc.with_known_phrases(Arc::new(list));
        }
        if let Some(path) = &self.dictionary {
            doc = doc.with_dictionary(Arc::new(WordSet::load(path)?));
        }
        if let Some(path) = &self.proper_nouns {
            doc = doc.with_known_proper(Arc::new(WordSet::load(path)?));
        }
        Ok(doc)
    }
}
