//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expression`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, symbols, groups, map literals, postfix access and calls

mod operators;
mod primary;

use weft_diagnostic::ParseResult;
use weft_ir::{Expression, TokenKind};
use weft_value::operators::BinaryOperator;

use crate::Parser;

impl Parser<'_, '_> {
    /// Parse an expression.
    ///
    /// Grows the stack on deeply nested input.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        weft_stack::guarded(|| self.parse_binary_or())
    }

    /// Parse `||` (lowest precedence).
    fn parse_binary_or(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_binary_and()?;

        while self.check(TokenKind::DoublePipe) {
            self.advance()?;
            let right = self.parse_binary_and()?;
            left = Expression::binary(BinaryOperator::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `&&`.
    fn parse_binary_and(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::DoubleAmpersand) {
            self.advance()?;
            let right = self.parse_equality()?;
            left = Expression::binary(BinaryOperator::And, left, right);
        }

        Ok(left)
    }

    /// Parse `=` and `!=`.
    fn parse_equality(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            self.advance()?;
            let right = self.parse_comparison()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>`, `>=`.
    fn parse_comparison(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.advance()?;
            let right = self.parse_additive()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `!` and `-`.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        if let Some(op) = self.match_unary_op() {
            self.advance()?;
            let operand = weft_stack::guarded(|| self.parse_unary())?;
            return Ok(Expression::unary(op, operand));
        }

        self.parse_postfix()
    }
}
