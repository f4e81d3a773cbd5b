//! Primary expressions and postfix operators.

use tracing::trace;
use weft_diagnostic::{ParseError, ParseResult};
use weft_ir::{Expression, TokenKind};
use weft_value::Value;

use crate::Parser;

impl Parser<'_, '_> {
    /// Parse a primary followed by any `.name`, `[index]` and `(args)`.
    pub(crate) fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let mut expression = self.parse_primary()?;

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance()?;
                    let member = match self.current_kind() {
                        TokenKind::Symbol => Value::from(self.advance()?.text),
                        TokenKind::Number => number(&self.advance()?.text),
                        _ => return Err(ParseError::unexpected(&self.current, "field name")),
                    };
                    expression = Expression::access(expression, Expression::Constant(member));
                }
                TokenKind::BracketBegin => {
                    self.advance()?;
                    let subscript = self.parse_expression()?;
                    self.expect(TokenKind::BracketEnd)?;
                    expression = Expression::access(expression, subscript);
                }
                TokenKind::ParenthesisBegin => {
                    self.advance()?;
                    let arguments =
                        self.parse_list(TokenKind::ParenthesisEnd, Self::parse_expression)?;
                    expression = Expression::invoke(expression, arguments);
                }
                _ => return Ok(expression),
            }
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        trace!(kind = %self.current_kind(), text = %self.current.text, "parse_primary");

        match self.current_kind() {
            TokenKind::Number => Ok(Expression::Constant(number(&self.advance()?.text))),
            TokenKind::String => Ok(Expression::Constant(Value::from(self.advance()?.text))),
            TokenKind::Symbol => {
                let name = self.advance()?.text;
                Ok(match name.as_str() {
                    "true" => Expression::Constant(Value::TRUE),
                    "false" => Expression::Constant(Value::FALSE),
                    "void" => Expression::Void,
                    _ => Expression::Symbol(name),
                })
            }
            TokenKind::ParenthesisBegin => {
                self.advance()?;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::ParenthesisEnd)?;
                Ok(inner)
            }
            TokenKind::BracketBegin => {
                self.advance()?;
                self.parse_map_literal()
            }
            _ => Err(ParseError::unexpected(&self.current, "expression")),
        }
    }

    /// `[a, b]` or `["k": v, ...]`, opening bracket consumed.
    ///
    /// Elements without a key take the next integer key, counting only
    /// keyless elements.
    fn parse_map_literal(&mut self) -> ParseResult<Expression> {
        let mut next_index = 0_u32;
        let elements = self.parse_list(TokenKind::BracketEnd, |parser| {
            let first = parser.parse_expression()?;
            if parser.check(TokenKind::Colon) {
                parser.advance()?;
                Ok((first, parser.parse_expression()?))
            } else {
                let key = Expression::constant(next_index);
                next_index += 1;
                Ok((key, first))
            }
        })?;
        Ok(Expression::Map(elements))
    }

    /// Comma-separated items up to and including `close`; a trailing comma
    /// is accepted.
    fn parse_list<T>(
        &mut self,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(item(self)?);
            if self.check(TokenKind::Comma) {
                self.advance()?;
            } else if !self.check(close) {
                return Err(ParseError::unexpected(
                    &self.current,
                    format!("',' or {}", close.describe()),
                ));
            }
        }
        self.advance()?;
        Ok(items)
    }
}

/// Number literals are digits with at most one decimal point.
fn number(text: &str) -> Value {
    Value::Number(text.parse().unwrap_or(0.0))
}
