//! Engine settings.

use weft_diagnostic::ConfigurationError;
use weft_lexer::Delimiters;
use weft_parse::Trimmer;

/// Delimiters, escape character and literal trimming of a [`Document`].
///
/// Delimiters are validated when a document is built, not here.
///
/// [`Document`]: crate::Document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub block_begin: String,
    pub block_continue: String,
    pub block_end: String,
    pub escape: char,
    pub trimmer: Trimmer,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            block_begin: "{{".to_owned(),
            block_continue: "|".to_owned(),
            block_end: "}}".to_owned(),
            escape: '\\',
            trimmer: Trimmer::Nothing,
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn with_block_begin(mut self, delimiter: impl Into<String>) -> Self {
        self.block_begin = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_block_continue(mut self, delimiter: impl Into<String>) -> Self {
        self.block_continue = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_block_end(mut self, delimiter: impl Into<String>) -> Self {
        self.block_end = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn with_trimmer(mut self, trimmer: Trimmer) -> Self {
        self.trimmer = trimmer;
        self
    }

    /// Validate the delimiters.
    pub fn delimiters(&self) -> Result<Delimiters, ConfigurationError> {
        Delimiters::new(
            &self.block_begin,
            &self.block_continue,
            &self.block_end,
            self.escape,
        )
    }
}
