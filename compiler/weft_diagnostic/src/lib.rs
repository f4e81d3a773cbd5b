//! Weft Diagnostic - compile-time errors.
//!
//! Compilation fails in exactly two ways, both fatal: the lexer rejects its
//! configuration, or the template is malformed. Rendering has no error type
//! at all; missing data resolves to void.

use thiserror::Error;
use weft_ir::{Location, Token};

/// Invalid lexer configuration, such as two identical delimiters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {setting} '{value}': {reason}")]
pub struct ConfigurationError {
    /// Name of the offending setting, e.g. `block_begin`.
    pub setting: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl ConfigurationError {
    pub fn new(setting: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        ConfigurationError {
            setting,
            value: value.into(),
            reason,
        }
    }
}

/// Lexical or syntactic failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{location}: unexpected '{found}', expected {expected}")]
pub struct ParseError {
    pub location: Location,
    /// Offending token text, `<eof>` at end of input.
    pub found: String,
    /// Human-readable description of what would have been valid.
    pub expected: String,
}

impl ParseError {
    pub fn new(location: Location, found: impl Into<String>, expected: impl Into<String>) -> Self {
        ParseError {
            location,
            found: found.into(),
            expected: expected.into(),
        }
    }

    /// Error located at `token`.
    pub fn unexpected(token: &Token, expected: impl Into<String>) -> Self {
        ParseError::new(token.location, token.describe(), expected)
    }
}

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;
