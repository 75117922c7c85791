//! Error types for file-key parsing and validation.

use thiserror::Error;

/// Coarse failure classes for [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// The input does not match the component's grammar.
    InvalidFormat,
    /// The input matches the grammar but is shorter than the minimum length.
    TooShort,
    /// The input matches the grammar but is longer than the maximum length.
    TooLong,
}

impl FormatReason {
    /// Returns the reason as a short string (e.g., "invalid format").
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatReason::InvalidFormat => "invalid format",
            FormatReason::TooShort => "too short",
            FormatReason::TooLong => "too long",
        }
    }
}

/// Error raised when constructing a file-key component from a string.
///
/// Every variant carries the offending input so callers can surface it
/// directly (e.g., as an "unrecognized file name" diagnostic). Construction
/// is atomic: on error no partial value exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid {what}: {input:?} does not match `{pattern}`")]
    InvalidFormat {
        /// Human name of the component being parsed (e.g., "setup label").
        what: &'static str,
        /// The offending input.
        input: String,
        /// The grammar the input failed to match.
        pattern: &'static str,
    },

    #[error("{what} {input:?} is too short: length {len}, minimum {min}")]
    TooShort {
        what: &'static str,
        input: String,
        len: usize,
        min: usize,
    },

    #[error("{what} {input:?} is too long: length {len}, maximum {max}")]
    TooLong {
        what: &'static str,
        input: String,
        len: usize,
        max: usize,
    },
}

impl FormatError {
    /// Returns the coarse failure class for this error.
    pub fn reason(&self) -> FormatReason {
        match self {
            FormatError::InvalidFormat { .. } => FormatReason::InvalidFormat,
            FormatError::TooShort { .. } => FormatReason::TooShort,
            FormatError::TooLong { .. } => FormatReason::TooLong,
        }
    }

    /// Returns the offending input string.
    pub fn input(&self) -> &str {
        match self {
            FormatError::InvalidFormat { input, .. }
            | FormatError::TooShort { input, .. }
            | FormatError::TooLong { input, .. } => input,
        }
    }
}
