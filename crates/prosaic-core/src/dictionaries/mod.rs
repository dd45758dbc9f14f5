//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by tokenization (abbreviations),
//! passive voice detection (participles), and syllable estimation.

pub mod abbreviations;
pub mod participles;
pub mod syllables;
