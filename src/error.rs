//! Error types for the coursefinder library.
//!
//! All errors are represented by the [`CourseFinderError`] enum. The parsing
//! pipeline itself is total, so in practice errors come from the boundary:
//! loading configuration, reading batch files, serializing output, or a
//! submission that carries no text at all.
//!
//! # Examples
//!
//! ```
//! use coursefinder::error::{CourseFinderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CourseFinderError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for coursefinder operations.
#[derive(Error, Debug)]
pub enum CourseFinderError {
    /// I/O errors (config files, batch input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction, filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The submitted query was empty or whitespace-only.
    #[error("Query is empty: enter a description of the course or training you are looking for")]
    EmptyQuery,

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CourseFinderError.
pub type Result<T> = std::result::Result<T, CourseFinderError>;

impl CourseFinderError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CourseFinderError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CourseFinderError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CourseFinderError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CourseFinderError::Other(msg.into())
    }

    /// Whether this error is the empty-submission warning rather than a failure.
    pub fn is_empty_query(&self) -> bool {
        matches!(self, CourseFinderError::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = CourseFinderError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = CourseFinderError::config("max_keywords must be at least 1");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_keywords must be at least 1"
        );

        let error = CourseFinderError::invalid_argument("unknown platform");
        assert_eq!(error.to_string(), "Invalid argument: unknown platform");
    }

    #[test]
    fn test_empty_query_flag() {
        assert!(CourseFinderError::EmptyQuery.is_empty_query());
        assert!(!CourseFinderError::other("x").is_empty_query());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CourseFinderError::from(io_error);

        match error {
            CourseFinderError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
