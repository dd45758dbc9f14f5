//! Sentences command: list every sentence with its classification.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use prosaic_core::config::Config;
use prosaic_core::document::SentenceType;
use prosaic_core::report::{DocumentReport, SentenceSummary};
use tracing::{debug, instrument};

use super::EngineArgs;

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to split (`.md` files are flattened first).
    pub file: Utf8PathBuf,

    /// Only list sentences that count toward the analysis
    #[arg(long)]
    pub valid_only: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Print the sentences of a file.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(args: SentencesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, valid_only = args.valid_only, "executing sentences command");

    let text = super::load_text(&args.file, config.input_limit())?;
    let mut doc = args.engine.build_document(config)?;
    doc.analyze(&text);

    let checks = ["sentences".to_string()];
    let report = DocumentReport::from_document(&doc, Some(&checks))?;
    let sentences: Vec<SentenceSummary> = report
        .sentences
        .unwrap_or_default()
        .into_iter()
        .filter(|sentence| sentence.valid || !args.valid_only)
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sentences)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    let mut paragraph = None;
    for sentence in &sentences {
        if paragraph.is_some_and(|p| p != sentence.paragraph) {
            println!();
        }
        paragraph = Some(sentence.paragraph);
        println!("{}", sentence_row(sentence));
    }
    println!(
        "\n  {} of {} sentences valid",
        report.counts.valid_sentences, report.counts.sentences
    );
    Ok(())
}

fn sentence_row(sentence: &SentenceSummary) -> String {
    let kind = format!("{:<10}", sentence.kind.as_str());
    let kind = match sentence.kind {
        SentenceType::Complete => kind.green().to_string(),
        SentenceType::Header => kind.cyan().to_string(),
        SentenceType::ListItem => kind.blue().to_string(),
        SentenceType::Incomplete => kind.yellow().to_string(),
    };
    let marker = if sentence.valid { "✓" } else { "·" };
    let ending = sentence.ending.map(String::from).unwrap_or_default();
    format!(
        "  {:>4} {kind} {marker} {}{ending}",
        sentence.index, sentence.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kind: SentenceType, valid: bool, ending: Option<char>) -> SentenceSummary {
        SentenceSummary {
            index: 7,
            paragraph: 2,
            kind,
            valid,
            word_count: 3,
            valid_word_count: 3,
            unit_count: 1,
            ending,
            text: "It was raining".into(),
        }
    }

    #[test]
    fn row_restores_ending() {
        let row = sentence_row(&summary(SentenceType::Complete, true, Some('.')));
        assert!(row.contains("It was raining."));
        assert!(row.contains('✓'));
        assert!(row.trim_start().starts_with('7'));
    }

    #[test]
    fn invalid_row_is_marked() {
        let row = sentence_row(&summary(SentenceType::Header, false, None));
        assert!(row.contains('·'));
        assert!(row.contains("header"));
        assert!(row.ends_with("It was raining"));
    }
}
