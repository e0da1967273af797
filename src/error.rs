//! Error types for piigen.

use thiserror::Error;

/// Result type for piigen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for piigen operations.
///
/// Only missing or structurally corrupt input escalates to an error. Soft
/// conditions (an empty street in one row, an entity span the tagger cannot
/// relocate) are handled locally by skipping or defaulting and never surface
/// here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Required input file absent or unreadable.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input parsing error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a missing input error.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Error::MissingInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
