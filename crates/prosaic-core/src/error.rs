//! Error types for prosaic-core.
//!
//! The analysis engine itself never fails: empty or odd input produces an
//! empty or sparsely-annotated [`Document`](crate::Document). These errors
//! cover the ambient surfaces around it (configuration and input loading).

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while preparing input for analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A word or phrase list could not be read.
    #[error("failed to read word list {path}")]
    WordList {
        /// Path of the list that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A report section name that does not exist.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available checks.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Reject input larger than `limit` bytes.
///
/// `None` disables the check.
pub const fn check_input_size(size: usize, limit: Option<usize>) -> AnalysisResult<()> {
    match limit {
        Some(limit) if size > limit => Err(AnalysisError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_size_within_limit() {
        assert!(check_input_size(10, Some(10)).is_ok());
        assert!(check_input_size(10, None).is_ok());
    }

    #[test]
    fn input_size_over_limit() {
        let err = check_input_size(11, Some(10)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InputTooLarge {
                size: 11,
                limit: 10
            }
        ));
        assert_eq!(
            err.to_string(),
            "input too large: 11 bytes (limit: 10 bytes)"
        );
    }

    #[test]
    fn unknown_check_lists_alternatives() {
        let err = AnalysisError::UnknownCheck {
            name: "pasive".into(),
            available: "passive, spelling".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown check: pasive. Use: passive, spelling"
        );
    }
}
