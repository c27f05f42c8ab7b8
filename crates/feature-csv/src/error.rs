//! Error types for feature conversion and CSV reformatting.
//!
//! Only conditions that prevent any output are represented here. Malformed
//! examples tables and unresolved placeholders degrade per record and never
//! surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a feature document into test-case records.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The parsed input contained no `Feature` node.
    #[error("no feature found in the document")]
    EmptyDocument,

    /// The feature file does not exist.
    #[error("feature file not found: {}", .0.display())]
    FeatureNotFound(PathBuf),

    /// The Gherkin parser rejected the document.
    #[error("failed to parse feature document: {0}")]
    Parse(String),

    /// Reading the feature file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reformatting an exported CSV file.
#[derive(Debug, Error)]
pub enum ReformatError {
    /// The input CSV file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_displays_message() {
        assert_eq!(
            ConvertError::EmptyDocument.to_string(),
            "no feature found in the document"
        );
    }

    #[test]
    fn feature_not_found_includes_path() {
        let error = ConvertError::FeatureNotFound(PathBuf::from("login.feature"));
        assert_eq!(error.to_string(), "feature file not found: login.feature");
    }

    #[test]
    fn reformat_io_error_converts_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ReformatError = io_err.into();
        assert!(error.to_string().contains("denied"));
    }
}
