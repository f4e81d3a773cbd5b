//! Weft Lexer - two-mode tokenizer for templates.
//!
//! The parser drives the lexer and picks the mode of every token:
//!
//! - **Raw** mode scans literal text up to the next block delimiter and
//!   returns either the text or the delimiter itself. The escape character
//!   makes the following character literal and is dropped from the output.
//! - **Block** mode tokenizes expressions inside a block header: operators,
//!   punctuation, numbers, quoted strings and symbols, skipping whitespace.
//!
//! Block mode never recognises delimiters. A character it cannot place
//! (including a lone `&` or `|`) comes back as an unconsumed
//! [`TokenKind::None`], and the parser re-lexes from there in raw mode to
//! find the delimiter that closes or continues the block.

mod cursor;
mod delimiters;

use weft_diagnostic::{ParseError, ParseResult};
use weft_ir::{Location, Token, TokenKind};

use cursor::Cursor;
pub use delimiters::Delimiters;

/// Which grammar the next token is read with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LexerMode {
    Raw,
    Block,
}

/// Tokenizer over one template source.
pub struct Lexer<'src, 'cfg> {
    cursor: Cursor<'src>,
    delimiters: &'cfg Delimiters,
}

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    pub fn new(source: &'src str, delimiters: &'cfg Delimiters) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            delimiters,
        }
    }

    /// Location of the next unread character.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Read the next token in `mode`.
    ///
    /// The only failure is a quoted string left open at end of input.
    pub fn next(&mut self, mode: LexerMode) -> ParseResult<Token> {
        match mode {
            LexerMode::Raw => Ok(self.next_raw()),
            LexerMode::Block => self.next_block(),
        }
    }

    /// Read literal text or a delimiter; raw mode cannot fail.
    pub fn next_raw(&mut self) -> Token {
        let start = self.cursor.location();
        let escape = self.delimiters.escape();
        let mut text = String::new();

        while let Some(c) = self.cursor.current() {
            if c == escape {
                if let Some(escaped) = self.cursor.peek() {
                    self.cursor.bump();
                    self.cursor.bump();
                    text.push(escaped);
                    continue;
                }
            } else if let Some((kind, length)) = self.delimiters.longest_match(self.cursor.rest()) {
                if !text.is_empty() {
                    return Token::new(TokenKind::Text, text, start);
                }
                let delimiter_start = self.cursor.location();
                let delimiter = self.cursor.advance(length);
                return Token::new(kind, delimiter, delimiter_start);
            }

            text.push(c);
            self.cursor.bump();
        }

        if text.is_empty() {
            Token::new(TokenKind::EndOfFile, "", start)
        } else {
            Token::new(TokenKind::Text, text, start)
        }
    }

    /// Read one expression token.
    pub fn next_block(&mut self) -> ParseResult<Token> {
        self.cursor.eat_while(|c| c <= ' ');

        let start = self.cursor.location();
        let Some(c) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::EndOfFile, "", start));
        };

        let token = match c {
            '!' => self.one_or_two('=', TokenKind::Bang, TokenKind::NotEqual),
            '<' => self.one_or_two('=', TokenKind::LowerThan, TokenKind::LowerEqual),
            '>' => self.one_or_two('=', TokenKind::GreaterThan, TokenKind::GreaterEqual),
            '&' => self.pair_or_none('&', TokenKind::DoubleAmpersand),
            '|' => self.pair_or_none('|', TokenKind::DoublePipe),
            '%' => self.single(TokenKind::Percent),
            '(' => self.single(TokenKind::ParenthesisBegin),
            ')' => self.single(TokenKind::ParenthesisEnd),
            '*' => self.single(TokenKind::Star),
            '+' => self.single(TokenKind::Plus),
            ',' => self.single(TokenKind::Comma),
            '-' => self.single(TokenKind::Minus),
            '.' => self.single(TokenKind::Dot),
            '/' => self.single(TokenKind::Slash),
            ':' => self.single(TokenKind::Colon),
            '=' => self.single(TokenKind::Equal),
            '[' => self.single(TokenKind::BracketBegin),
            ']' => self.single(TokenKind::BracketEnd),
            '0'..='9' => self.number(),
            'A'..='Z' | 'a'..='z' | '_' => {
                let text = self
                    .cursor
                    .eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
                Token::new(TokenKind::Symbol, text, start)
            }
            '\'' | '"' => return self.string(c),
            other => Token::new(TokenKind::None, other.to_string(), start),
        };

        Ok(token)
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.location();
        let text = self.cursor.bump().map(String::from).unwrap_or_default();
        Token::new(kind, text, start)
    }

    /// `c` alone is `one`; `c` followed by `second` is `two`.
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) -> Token {
        let start = self.cursor.location();
        let first = self.cursor.bump().unwrap_or_default();
        if self.cursor.current() == Some(second) {
            self.cursor.bump();
            Token::new(two, format!("{first}{second}"), start)
        } else {
            Token::new(one, first.to_string(), start)
        }
    }

    /// A doubled character is an operator; a lone one is left unconsumed.
    fn pair_or_none(&mut self, c: char, kind: TokenKind) -> Token {
        let start = self.cursor.location();
        if self.cursor.peek() == Some(c) {
            self.cursor.bump();
            self.cursor.bump();
            Token::new(kind, format!("{c}{c}"), start)
        } else {
            Token::new(TokenKind::None, c.to_string(), start)
        }
    }

    /// Digits with at most one decimal point.
    fn number(&mut self) -> Token {
        let start = self.cursor.location();
        let mut text = String::new();
        let mut dot = false;

        while let Some(c) = self.cursor.current() {
            if c.is_ascii_digit() || (c == '.' && !dot) {
                dot |= c == '.';
                text.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Number, text, start)
    }

    /// Quoted string; the escape character takes the next one literally.
    fn string(&mut self, quote: char) -> ParseResult<Token> {
        let start = self.cursor.location();
        let escape = self.delimiters.escape();
        let mut text = String::new();
        self.cursor.bump();

        loop {
            match self.cursor.bump() {
                None => {
                    return Err(ParseError::new(
                        self.cursor.location(),
                        "<eof>",
                        "end of string",
                    ))
                }
                Some(c) if c == quote => return Ok(Token::new(TokenKind::String, text, start)),
                Some(c) if c == escape => {
                    if let Some(escaped) = self.cursor.bump() {
                        text.push(escaped);
                    }
                }
                Some(c) => text.push(c),
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
