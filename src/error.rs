//! Error types for the catalog search crate
//!
//! The engine itself never fails: malformed queries degrade to broader
//! result sets by design. These errors cover the caller surfaces around
//! it — loading and parsing the corpus, and invalid CLI input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Corpus load failed: {0}")]
    CorpusLoad(#[from] std::io::Error),
    #[error("Corpus parse failed: {0}")]
    CorpusParse(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for JSON consumers.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::CorpusLoad(_) => "corpus_load_failed",
            AppError::CorpusParse(_) => "corpus_parse_failed",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::InvalidInput("page must be >= 1".to_string());
        assert_eq!(error.to_string(), "Invalid input: page must be >= 1");
        assert_eq!(error.error_code(), "invalid_input");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::CorpusLoad(_)));
        assert_eq!(error.error_code(), "corpus_load_failed");

        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: AppError = json_error.into();
        assert!(matches!(error, AppError::CorpusParse(_)));
        assert_eq!(error.error_code(), "corpus_parse_failed");
    }
}
