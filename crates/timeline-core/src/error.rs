//! Error types for the timeline library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// Comprehensive error type for all timeline operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A date range whose start falls after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: Date, end: Date },
    /// Blank phase or project name
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Malformed date string
    #[error("Could not parse date '{input}': {source}")]
    DateParse {
        input: String,
        #[source]
        source: jiff::Error,
    },
    /// Date arithmetic left the supported calendar range
    #[error("Date arithmetic error: {message}")]
    DateArithmetic {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimelineError {
        TimelineError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimelineError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an inverted-range error.
    pub fn invalid_range(start: Date, end: Date) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Creates a blank-name error.
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }

    /// Creates a date parsing error for `input`.
    pub fn date_parse(input: impl Into<String>, source: jiff::Error) -> Self {
        Self::DateParse {
            input: input.into(),
            source,
        }
    }
}

/// Specialized extension trait for jiff arithmetic Results.
pub trait DateResultExt<T> {
    /// Map calendar arithmetic errors with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|source| TimelineError::DateArithmetic {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
