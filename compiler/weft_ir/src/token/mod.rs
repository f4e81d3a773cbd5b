//! Token types for the weft lexer.

use std::fmt;

use crate::Location;

/// A token with the location of its first character.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text; unescaped content for strings and text.
    pub text: String,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Whether this is the bare word `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == keyword
    }

    /// How the token is shown in diagnostics.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::EndOfFile => "<eof>",
            _ => &self.text,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.location)
    }
}

/// Token kinds.
///
/// Raw mode produces `Text`, the three delimiters and `EndOfFile`; block
/// mode produces everything else. `None` marks a character block mode does
/// not recognise; it is left unconsumed so the caller can re-lex it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    BlockBegin,
    BlockContinue,
    BlockEnd,
    Text,
    EndOfFile,
    None,

    // Literals
    Number,
    String,
    Symbol,

    // Punctuation
    Colon,
    Comma,
    Dot,
    ParenthesisBegin,
    ParenthesisEnd,
    BracketBegin,
    BracketEnd,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Equal,
    NotEqual,
    LowerThan,
    LowerEqual,
    GreaterThan,
    GreaterEqual,
    DoubleAmpersand,
    DoublePipe,
}

impl TokenKind {
    /// Description used in "expected ..." diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::BlockBegin => "block begin",
            TokenKind::BlockContinue => "block continue",
            TokenKind::BlockEnd => "block end",
            TokenKind::Text => "text",
            TokenKind::EndOfFile => "end of file",
            TokenKind::None => "character",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::ParenthesisBegin => "'('",
            TokenKind::ParenthesisEnd => "')'",
            TokenKind::BracketBegin => "'['",
            TokenKind::BracketEnd => "']'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Bang => "'!'",
            TokenKind::Equal => "'='",
            TokenKind::NotEqual => "'!='",
            TokenKind::LowerThan => "'<'",
            TokenKind::LowerEqual => "'<='",
            TokenKind::GreaterThan => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::DoubleAmpersand => "'&&'",
            TokenKind::DoublePipe => "'||'",
        }
    }

    /// Whether this kind is one of the three configured delimiters.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::BlockBegin | TokenKind::BlockContinue | TokenKind::BlockEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests;
