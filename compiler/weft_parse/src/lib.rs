//! Weft Parse - recursive-descent parser for templates.
//!
//! The parser drives a [`Lexer`] through the template, reading literal text
//! in raw mode and block headers in block mode, and builds a [`Statement`]
//! tree directly from the tokens.
//!
//! # Module Structure
//!
//! - `lib.rs`: parser state, token helpers, and the [`parse`] entry point
//! - `grammar/statement.rs`: bodies and block headers
//! - `grammar/expression`: precedence chain, primaries, postfix operators
//! - `trimmer`: whitespace policies for literal text

mod grammar;
mod trimmer;

use tracing::trace;
use weft_diagnostic::{ParseError, ParseResult};
use weft_ir::{Location, Statement, Token, TokenKind};
use weft_lexer::{Delimiters, Lexer};

pub use trimmer::Trimmer;

/// Parse a whole template.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, delimiters: &Delimiters, trimmer: Trimmer) -> ParseResult<Statement> {
    Parser::new(source, delimiters, trimmer).parse_document()
}

/// Parser state.
pub(crate) struct Parser<'src, 'cfg> {
    lexer: Lexer<'src, 'cfg>,
    /// Block-mode lookahead, valid while inside a block header.
    current: Token,
    trimmer: Trimmer,
}

impl<'src, 'cfg> Parser<'src, 'cfg> {
    fn new(source: &'src str, delimiters: &'cfg Delimiters, trimmer: Trimmer) -> Self {
        Parser {
            lexer: Lexer::new(source, delimiters),
            current: Token::new(TokenKind::EndOfFile, "", Location::START),
            trimmer,
        }
    }

    // === Token helpers ===

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        self.current.is_keyword(keyword)
    }

    /// Read the next block-mode token into `current`, returning the old one.
    pub(crate) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_block()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume `current` if it has `kind`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::unexpected(&self.current, kind.describe()))
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        if self.check_keyword(keyword) {
            self.advance()
        } else {
            Err(ParseError::unexpected(&self.current, format!("'{keyword}'")))
        }
    }

    /// Consume a symbol, returning its name.
    pub(crate) fn expect_symbol(&mut self) -> ParseResult<String> {
        self.expect(TokenKind::Symbol).map(|token| token.text)
    }

    /// Read a raw-mode token starting at the unconsumed block character.
    ///
    /// Only valid when `current` is a [`TokenKind::None`].
    pub(crate) fn relex_raw(&mut self) -> Token {
        trace!(location = %self.current.location, "switching to raw mode");
        self.lexer.next_raw()
    }

    /// Consume the delimiter that closes a block header.
    pub(crate) fn expect_block_end(&mut self) -> ParseResult<()> {
        if !self.check(TokenKind::None) {
            return Err(ParseError::unexpected(&self.current, "block end"));
        }
        let token = self.relex_raw();
        if token.is(TokenKind::BlockEnd) {
            Ok(())
        } else {
            Err(ParseError::unexpected(&token, "block end"))
        }
    }

    /// Whether the header has nothing left but its closing delimiter.
    pub(crate) fn at_header_end(&self) -> bool {
        self.check(TokenKind::None)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
