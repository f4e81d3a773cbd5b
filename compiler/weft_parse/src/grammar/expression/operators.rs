//! Operator Matching Helpers
//!
//! Map the current token onto the operator it denotes at each precedence
//! level.

use weft_ir::TokenKind;
use weft_value::operators::{BinaryOperator, UnaryOperator};

use crate::Parser;

impl Parser<'_, '_> {
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOperator> {
        match self.current_kind() {
            TokenKind::Equal => Some(BinaryOperator::Equal),
            TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOperator> {
        match self.current_kind() {
            TokenKind::LowerThan => Some(BinaryOperator::Lower),
            TokenKind::LowerEqual => Some(BinaryOperator::LowerEqual),
            TokenKind::GreaterThan => Some(BinaryOperator::Greater),
            TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOperator> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOperator> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            TokenKind::Percent => Some(BinaryOperator::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOperator> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOperator::Negate),
            TokenKind::Bang => Some(UnaryOperator::Not),
            _ => None,
        }
    }
}
