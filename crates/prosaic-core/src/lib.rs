//! Core library for prosaic.
//!
//! This crate provides the document indexing and analysis engine used by
//! the `prosaic` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`document`] - The [`Document`] model, loading and the finalize passes
//! - [`collaborators`] - Pluggable syllabizers, stemmers, predicates and word lists
//! - [`phrases`] - Known and excluded phrase collections
//! - [`report`] - Serializable summaries of an analyzed document
//! - [`markdown`] - Markdown flattening for `.md` inputs
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prosaic_core::Document;
//! use prosaic_core::config::AnalysisConfig;
//! use prosaic_core::report::DocumentReport;
//!
//! let mut doc = Document::new(AnalysisConfig::default());
//! doc.analyze("The ball was thrown by the boy. He ran in order to catch it.");
//!
//! let report = DocumentReport::from_document(&doc, None).expect("all checks are known");
//! assert_eq!(report.counts.valid_sentences, 2);
//! assert_eq!(report.passive_voice.map(|p| p.len()), Some(1));
//! ```
#![deny(unsafe_code)]

pub mod chars;
pub mod collaborators;
pub mod config;
pub mod dictionaries;
pub mod document;
pub mod error;
pub mod markdown;
pub mod phrases;
pub mod predicates;
pub mod report;
pub mod tokenizer;
pub mod word_lists;

pub use config::{Config, ConfigLoader, LogLevel};
pub use document::Document;
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use report::DocumentReport;
