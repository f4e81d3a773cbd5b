//! Statement parsing.
//!
//! A body is a run of literal text and blocks, closed by end of input, by a
//! `{{ end }}` block, or by a continue delimiter opening an alternative
//! branch (`{{ | ... }}`). The caller decides which closings are legal.

use tracing::trace;
use weft_diagnostic::{ParseError, ParseResult};
use weft_ir::{Expression, Statement, StoreMode, Token, TokenKind};

use crate::Parser;

/// What closed a body.
pub(crate) enum Terminator {
    /// End of input; carries the end-of-file token.
    Eof(Token),
    /// `{{ |`; the rest of the header is still unread.
    Continue(Token),
    /// `{{ end }}`, fully consumed.
    End(Token),
}

impl Terminator {
    fn token(&self) -> &Token {
        match self {
            Terminator::Eof(token) | Terminator::Continue(token) | Terminator::End(token) => token,
        }
    }
}

impl Parser<'_, '_> {
    /// Parse the whole template; only end of input may close it.
    pub(crate) fn parse_document(&mut self) -> ParseResult<Statement> {
        let (body, terminator) = self.parse_body()?;
        match terminator {
            Terminator::Eof(_) => Ok(body),
            other => Err(ParseError::unexpected(other.token(), "end of file")),
        }
    }

    /// Parse a body up to whatever closes it.
    pub(crate) fn parse_body(&mut self) -> ParseResult<(Statement, Terminator)> {
        weft_stack::guarded(|| self.parse_body_inner())
    }

    fn parse_body_inner(&mut self) -> ParseResult<(Statement, Terminator)> {
        let mut statements = Vec::new();
        let mut text = String::new();

        let terminator = loop {
            let token = self.lexer.next_raw();
            match token.kind {
                TokenKind::Text | TokenKind::BlockContinue | TokenKind::BlockEnd => {
                    text.push_str(&token.text);
                }
                TokenKind::BlockBegin => {
                    self.flush_literal(&mut text, &mut statements);
                    self.advance()?;
                    if let Some(terminator) = self.parse_block(&mut statements)? {
                        break terminator;
                    }
                }
                _ => {
                    self.flush_literal(&mut text, &mut statements);
                    break Terminator::Eof(token);
                }
            }
        };

        Ok((Statement::sequence(statements), terminator))
    }

    fn flush_literal(&self, text: &mut String, statements: &mut Vec<Statement>) {
        if text.is_empty() {
            return;
        }
        let trimmed = self.trimmer.apply(text);
        if !trimmed.is_empty() {
            statements.push(Statement::Literal(trimmed.into_owned()));
        }
        text.clear();
    }

    /// Parse one block whose begin delimiter is consumed and whose first
    /// header token is `current`. Returns a terminator when the block
    /// closes the enclosing body.
    fn parse_block(&mut self, statements: &mut Vec<Statement>) -> ParseResult<Option<Terminator>> {
        trace!(
            location = %self.current.location,
            head = %self.current.text,
            "block header"
        );

        if self.at_header_end() {
            let delimiter = self.relex_raw();
            return match delimiter.kind {
                TokenKind::BlockContinue => Ok(Some(Terminator::Continue(delimiter))),
                // `{{}}` is an empty block.
                TokenKind::BlockEnd => Ok(None),
                _ => Err(ParseError::unexpected(&delimiter, "block header")),
            };
        }

        if self.check(TokenKind::Symbol) {
            let head = self.current.text.clone();
            let statement = match head.as_str() {
                "end" => {
                    let token = self.advance()?;
                    self.expect_block_end()?;
                    return Ok(Some(Terminator::End(token)));
                }
                "echo" => {
                    self.advance()?;
                    Statement::Echo(self.parse_operand()?)
                }
                "dump" => {
                    self.advance()?;
                    Statement::Dump(self.parse_operand()?)
                }
                "return" => {
                    self.advance()?;
                    let value = if self.at_header_end() {
                        Expression::Void
                    } else {
                        self.parse_expression()?
                    };
                    self.expect_block_end()?;
                    Statement::Return(value)
                }
                "set" => self.parse_set()?,
                "define" => self.parse_define()?,
                "capture" => self.parse_capture()?,
                "if" => {
                    self.advance()?;
                    self.parse_if()?
                }
                "for" => self.parse_for()?,
                "while" => self.parse_while()?,
                "wrap" => self.parse_wrap()?,
                "unwrap" => {
                    self.advance()?;
                    self.expect_block_end()?;
                    Statement::Unwrap(Box::new(self.parse_closed_body()?))
                }
                _ => Statement::Echo(self.parse_operand()?),
            };
            statements.push(statement);
            return Ok(None);
        }

        statements.push(Statement::Echo(self.parse_operand()?));
        Ok(None)
    }

    /// An expression filling the rest of the header.
    fn parse_operand(&mut self) -> ParseResult<Expression> {
        let expression = self.parse_expression()?;
        self.expect_block_end()?;
        Ok(expression)
    }

    /// A body that only `{{ end }}` may close.
    fn parse_closed_body(&mut self) -> ParseResult<Statement> {
        let (body, terminator) = self.parse_body()?;
        match terminator {
            Terminator::End(_) => Ok(body),
            other => Err(ParseError::unexpected(other.token(), "'end'")),
        }
    }

    /// Optional `global`/`local`/`private` before a declared name.
    fn parse_mode(&mut self) -> ParseResult<StoreMode> {
        if self.check(TokenKind::Symbol) {
            if let Some(mode) = StoreMode::from_keyword(&self.current.text) {
                self.advance()?;
                return Ok(mode);
            }
        }
        Ok(StoreMode::default())
    }

    /// `set [mode] name to expr`
    fn parse_set(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let mode = self.parse_mode()?;
        let name = self.expect_symbol()?;
        self.expect_keyword("to")?;
        let value = self.parse_operand()?;
        Ok(Statement::AssignValue { name, mode, value })
    }

    /// `define [mode] name(a, b) ... end`
    fn parse_define(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let mode = self.parse_mode()?;
        let name = self.expect_symbol()?;

        self.expect(TokenKind::ParenthesisBegin)?;
        let mut arguments = Vec::new();
        while !self.check(TokenKind::ParenthesisEnd) {
            arguments.push(self.expect_symbol()?);
            if !self.check(TokenKind::ParenthesisEnd) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.advance()?;
        self.expect_block_end()?;

        let body = self.parse_closed_body()?;
        Ok(Statement::AssignFunction {
            name,
            mode,
            arguments,
            body: Box::new(body),
        })
    }

    /// `capture [mode] name ... end`
    fn parse_capture(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let mode = self.parse_mode()?;
        let name = self.expect_symbol()?;
        self.expect_block_end()?;

        let body = self.parse_closed_body()?;
        Ok(Statement::AssignRender {
            name,
            mode,
            body: Box::new(body),
        })
    }

    /// Condition and branches of an `if`, after the `if`/`elif` keyword.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let condition = self.parse_operand()?;
        let (body, terminator) = self.parse_body()?;

        let next = match terminator {
            Terminator::End(_) => None,
            Terminator::Eof(token) => return Err(ParseError::unexpected(&token, "'end'")),
            Terminator::Continue(_) => {
                self.advance()?;
                if self.check_keyword("elif") {
                    self.advance()?;
                    Some(Box::new(self.parse_if()?))
                } else {
                    if self.check_keyword("else") {
                        self.advance()?;
                    }
                    self.expect_block_end()?;
                    Some(Box::new(self.parse_closed_body()?))
                }
            }
        };

        Ok(Statement::If {
            condition,
            body: Box::new(body),
            next,
        })
    }

    /// `for [key,] value in source ... [| empty ...] end`
    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let first = self.expect_symbol()?;
        let (key, value) = if self.check(TokenKind::Comma) {
            self.advance()?;
            (Some(first), self.expect_symbol()?)
        } else {
            (None, first)
        };
        self.expect_keyword("in")?;
        let source = self.parse_operand()?;

        let (body, terminator) = self.parse_body()?;
        let empty = match terminator {
            Terminator::End(_) => None,
            Terminator::Eof(token) => return Err(ParseError::unexpected(&token, "'end'")),
            Terminator::Continue(_) => {
                self.advance()?;
                if self.check_keyword("empty") {
                    self.advance()?;
                }
                self.expect_block_end()?;
                Some(Box::new(self.parse_closed_body()?))
            }
        };

        Ok(Statement::For {
            key,
            value,
            source,
            body: Box::new(body),
            empty,
        })
    }

    /// `while condition ... end`
    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let condition = self.parse_operand()?;
        let body = self.parse_closed_body()?;
        Ok(Statement::While {
            condition,
            body: Box::new(body),
        })
    }

    /// `wrap modifier ... end`
    fn parse_wrap(&mut self) -> ParseResult<Statement> {
        self.advance()?;
        let modifier = self.parse_operand()?;
        let body = self.parse_closed_body()?;
        Ok(Statement::Wrap {
            modifier,
            body: Box::new(body),
        })
    }
}
