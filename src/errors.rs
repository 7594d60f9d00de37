// ABOUTME: Error types for the reveal-search application
// ABOUTME: Covers the failures at the edges of extraction: files, patterns, output

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Invalid separator pattern {pattern:?}: {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Source discovery error: {0}")]
    DiscoveryError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No documents produced: all {0} source file(s) failed")]
    NoDocumentsError(usize),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our SearchError
impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        SearchError::UnknownError(err.to_string())
    }
}

impl From<glob::PatternError> for SearchError {
    fn from(err: glob::PatternError) -> Self {
        SearchError::DiscoveryError(format!("Invalid glob pattern: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
