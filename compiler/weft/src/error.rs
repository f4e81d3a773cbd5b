//! Errors of the facade and CLI.

use weft_diagnostic::{ConfigurationError, ParseError};

/// Everything that can stop a document from being built or rendered to a
/// file. Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid context: {0}")]
    Context(#[from] serde_json::Error),
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}
