//! Crate-wide error types

use thiserror::Error;

/// Errors produced by the lookup service
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset directory not found: {0}")]
    DatasetMissing(String),

    #[error("Syllabus catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LookupError>;

impl From<config::ConfigError> for LookupError {
    fn from(e: config::ConfigError) -> Self {
        LookupError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::DatasetMissing("data/missing".to_string());
        assert!(err.to_string().contains("data/missing"));

        let err = LookupError::Config("bad threshold".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
