//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use prosaic_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    language: String,
    /// Effective input limit; absent when disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    long_sentence_threshold: usize,
    list_run_threshold: usize,
    aggressive_exclusion: bool,
    excluded_phrases: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ngram_sizes: Vec<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let analysis = &config.analysis;
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            language: config.language.to_string(),
            max_input_bytes: config.input_limit(),
            long_sentence_threshold: analysis.long_sentence_threshold,
            list_run_threshold: analysis.list_run_threshold,
            aggressive_exclusion: analysis.aggressive_exclusion,
            excluded_phrases: analysis.excluded_phrases.len(),
            ngram_sizes: analysis.ngram_sizes.clone(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    let info = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match &info.config_file {
        Some(path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), info.log_level);
    if let Some(ref dir) = info.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match info.max_input_bytes {
        Some(limit) => println!("{}: {limit} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {}", "Language".dimmed(), info.language);
    println!(
        "{}: {} words",
        "Long sentence threshold".dimmed(),
        info.long_sentence_threshold
    );
    println!("{}: {}", "List run threshold".dimmed(), info.list_run_threshold);
    println!(
        "{}: {}",
        "Aggressive exclusion".dimmed(),
        info.aggressive_exclusion
    );
    println!("{}: {}", "Excluded phrases".dimmed(), info.excluded_phrases);
    if !info.ngram_sizes.is_empty() {
        let sizes: Vec<_> = info.ngram_sizes.iter().map(ToString::to_string).collect();
        println!("{}: {}", "N-gram sizes".dimmed(), sizes.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosaic_core::config::DEFAULT_MAX_INPUT_BYTES;

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                false,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(
            cmd_info(
                InfoArgs::default(),
                true,
                &Config::default(),
                &ConfigSources::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.language, "english");
        assert_eq!(info.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(info.long_sentence_threshold, 22);
    }

    #[test]
    fn test_config_info_disabled_limit() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
