//! Analyze command: run the engine and report its findings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use prosaic_core::config::Config;
use prosaic_core::report::{
    ALL_CHECKS, DocumentReport, PhraseFinding, SentenceFinding, SpanFinding, WordFinding,
    validate_checks,
};
use tracing::{debug, instrument};

use super::EngineArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`.md` files are flattened first).
    #[arg(required_unless_present = "schema")]
    pub file: Option<Utf8PathBuf>,

    /// Report sections to include (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude")]
    pub checks: Option<Vec<String>>,

    /// Report sections to leave out (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Print the JSON schema of the report and exit
    #[arg(long)]
    pub schema: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Analyze a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    if args.schema {
        let schema = schemars::schema_for!(DocumentReport);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }
    let Some(file) = args.file else {
        anyhow::bail!("no input file given");
    };
    debug!(
        file = %file,
        checks = ?args.checks,
        exclude = ?args.exclude,
        "executing analyze command"
    );

    // fail on a bad section name before doing any work
    let checks = selected_checks(args.checks, args.exclude)?;

    let text = super::load_text(&file, config.input_limit())?;
    let mut doc = args.engine.build_document(config)?;
    doc.analyze(&text);
    let report = DocumentReport::from_document(&doc, checks.as_deref())
        .with_context(|| format!("failed to analyze {file}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&file, &report);
    Ok(())
}

/// Resolve `--checks` / `--exclude` into the sections to report.
fn selected_checks(
    checks: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> anyhow::Result<Option<Vec<String>>> {
    if let Some(checks) = &checks {
        validate_checks(checks)?;
    }
    let Some(exclude) = exclude else {
        return Ok(checks);
    };
    validate_checks(&exclude)?;
    let remaining = ALL_CHECKS
        .iter()
        .filter(|name| !exclude.iter().any(|excluded| excluded == *name))
        .map(ToString::to_string)
        .collect();
    Ok(Some(remaining))
}

fn print_report(file: &Utf8Path, report: &DocumentReport) {
    let counts = &report.counts;
    println!("{}", file.bold());
    println!(
        "\n  {} {} words ({} valid), {} sentences ({} valid), {} paragraphs ({} valid)",
        "Counts:".cyan(),
        counts.words,
        counts.valid_words,
        counts.sentences,
        counts.valid_sentences,
        counts.paragraphs,
        counts.valid_paragraphs,
    );
    println!(
        "          {} syllables, {} clauses, {} punctuation marks",
        counts.valid_syllables,
        counts.units,
        counts.valid_punctuation,
    );

    if let Some(phrases) = &report.known_phrases {
        print_section("Known phrases:", phrases, phrase_line);
    }
    if let Some(words) = &report.duplicate_words {
        print_section("Duplicate words:", words, word_line);
    }
    if let Some(words) = &report.mismatched_articles {
        print_section("Articles:", words, word_line);
    }
    if let Some(spans) = &report.passive_voice {
        print_section("Passive voice:", spans, span_line);
    }
    if let Some(words) = &report.misspellings {
        print_section("Misspellings:", words, word_line);
    }
    if let Some(overused) = &report.overused_words
        && !overused.is_empty()
    {
        let top: Vec<_> = overused
            .iter()
            .take(5)
            .map(|found| format!("\"{}\" ×{}", found.stem, found.words.len()))
            .collect();
        println!("\n  {} {}", "Overused:".yellow(), top.join(", "));
    }
    if let Some(sentences) = &report.conjunction_starts {
        print_section("Conjunction starts:", sentences, sentence_line);
    }
    if let Some(sentences) = &report.lowercase_starts {
        print_section("Lowercase starts:", sentences, sentence_line);
    }
    if let Some(spans) = &report.negated_phrases {
        print_section("Negated phrases:", spans, span_line);
    }
    if let Some(spans) = &report.proper_phrases {
        print_section("Proper phrases:", spans, span_line);
    }
    if let Some(ngrams) = &report.ngrams
        && !ngrams.is_empty()
    {
        println!("\n  {}", "Recurring n-grams:".cyan());
        for ngram in ngrams {
            println!("    \"{}\" ×{}", ngram.text, ngram.occurrences.len());
        }
    }

    let total = report.finding_count();
    if total == 0 {
        println!("\n  {}", "No findings.".green());
    } else {
        println!("\n  {} {total}", "Findings:".bold());
    }
}

/// Print a labelled list; empty lists print nothing.
fn print_section<T>(label: &str, items: &[T], line: fn(&T) -> String) {
    if items.is_empty() {
        return;
    }
    println!("\n  {} {}", label.yellow(), items.len());
    for item in items {
        println!("    {}", line(item));
    }
}

fn word_line(found: &WordFinding) -> String {
    format!("{} {}", format!("[s{}]", found.sentence).dimmed(), found.text)
}

fn span_line(found: &SpanFinding) -> String {
    format!("{} {}", format!("[s{}]", found.sentence).dimmed(), found.text)
}

fn phrase_line(found: &PhraseFinding) -> String {
    let base = format!(
        "{} {} ({})",
        format!("[s{}]", found.span.sentence).dimmed(),
        found.span.text,
        found.kind,
    );
    match &found.suggestion {
        Some(suggestion) => format!("{base} → {}", suggestion.green()),
        None => base,
    }
}

fn sentence_line(found: &SentenceFinding) -> String {
    format!("{} {}", format!("[s{}]", found.sentence).dimmed(), found.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosaic_core::phrases::PhraseKind;

    fn finding(kind: PhraseKind, suggestion: Option<&str>) -> PhraseFinding {
        PhraseFinding {
            span: SpanFinding {
                first_word: 3,
                len: 3,
                sentence: 0,
                text: "in order to".into(),
            },
            kind,
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    #[test]
    fn phrase_line_shows_kind_and_suggestion() {
        let line = phrase_line(&finding(PhraseKind::Wordy, Some("to")));
        assert!(line.contains("in order to (wordy)"));
        assert!(line.contains("→"));
    }

    #[test]
    fn phrase_line_without_suggestion() {
        let line = phrase_line(&finding(PhraseKind::Cliche, None));
        assert!(line.ends_with("in order to (cliche)"));
    }

    #[test]
    fn exclude_removes_sections() {
        let checks = selected_checks(None, Some(vec!["sentences".into(), "ngrams".into()]))
            .unwrap()
            .unwrap();
        assert_eq!(checks.len(), ALL_CHECKS.len() - 2);
        assert!(!checks.iter().any(|name| name == "sentences"));
    }

    #[test]
    fn no_selection_means_all() {
        assert!(selected_checks(None, None).unwrap().is_none());
    }

    #[test]
    fn unknown_exclude_fails() {
        let err = selected_checks(None, Some(vec!["bogus".into()])).unwrap_err();
        assert!(err.to_string().contains("unknown check"));
    }

    #[test]
    fn unknown_check_fails_before_reading() {
        let args = AnalyzeArgs {
            file: Some(Utf8PathBuf::from("/nonexistent/input.txt")),
            checks: Some(vec!["bogus".into()]),
            exclude: None,
            schema: false,
            engine: EngineArgs::default(),
        };
        let err = cmd_analyze(args, false, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("unknown check"));
    }
}
