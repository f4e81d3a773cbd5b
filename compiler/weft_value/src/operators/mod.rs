//! Operator functions.
//!
//! The parser lowers `a + b` to an invocation of a constant function value,
//! so operators need no dedicated expression kind. The operator set is
//! fixed, so dispatch is a plain `match` over the operator enum.
//!
//! Arithmetic is numeric only: operands are coerced with
//! [`Value::as_number`] and follow IEEE semantics, so `1 / 0` is infinity
//! and `0 / 0` is `NaN` rather than an error. `&&` and `||` evaluate both
//! operands and return a boolean.

use std::fmt;
use std::sync::OnceLock;

use crate::{Frame, Function, Output, Value};

/// Binary operator, listed from lowest to highest precedence group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Equal,
    NotEqual,
    Lower,
    LowerEqual,
    Greater,
    GreaterEqual,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    Negate,
}

impl BinaryOperator {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOperator; 13] = [
        BinaryOperator::Or,
        BinaryOperator::And,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::Lower,
        BinaryOperator::LowerEqual,
        BinaryOperator::Greater,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Mod,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Lower => "<",
            BinaryOperator::LowerEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, left: &Value, right: &Value) -> Value {
        match self {
            BinaryOperator::Or => Value::Boolean(left.as_boolean() || right.as_boolean()),
            BinaryOperator::And => Value::Boolean(left.as_boolean() && right.as_boolean()),
            BinaryOperator::Equal => Value::Boolean(left == right),
            BinaryOperator::NotEqual => Value::Boolean(left != right),
            BinaryOperator::Lower => Value::Boolean(left < right),
            BinaryOperator::LowerEqual => Value::Boolean(left <= right),
            BinaryOperator::Greater => Value::Boolean(left > right),
            BinaryOperator::GreaterEqual => Value::Boolean(left >= right),
            BinaryOperator::Add => Value::Number(left.as_number() + right.as_number()),
            BinaryOperator::Sub => Value::Number(left.as_number() - right.as_number()),
            BinaryOperator::Mul => Value::Number(left.as_number() * right.as_number()),
            BinaryOperator::Div => Value::Number(left.as_number() / right.as_number()),
            BinaryOperator::Mod => Value::Number(left.as_number() % right.as_number()),
        }
    }

    /// The operator as a function value taking two arguments.
    ///
    /// The value is shared, so every call returns the same function.
    pub fn function(self) -> Value {
        static FUNCTIONS: OnceLock<Vec<Value>> = OnceLock::new();
        let functions = FUNCTIONS.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|&op| Value::function(Operator::Binary(op)))
                .collect()
        });
        functions[self as usize].clone()
    }
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 2] = [UnaryOperator::Not, UnaryOperator::Negate];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Negate => "-",
        }
    }

    pub fn apply(self, operand: &Value) -> Value {
        match self {
            UnaryOperator::Not => Value::Boolean(!operand.as_boolean()),
            UnaryOperator::Negate => Value::Number(-operand.as_number()),
        }
    }

    /// The operator as a shared function value taking one argument.
    pub fn function(self) -> Value {
        static FUNCTIONS: OnceLock<Vec<Value>> = OnceLock::new();
        let functions = FUNCTIONS.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|&op| Value::function(Operator::Unary(op)))
                .collect()
        });
        functions[self as usize].clone()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Function for Operator {
    fn is_pure(&self) -> bool {
        true
    }

    fn invoke(&self, _: &mut Frame<'_>, arguments: &[Value], _: &mut dyn Output) -> Value {
        match (self, arguments) {
            (Operator::Binary(op), [left, right]) => op.apply(left, right),
            (Operator::Unary(op), [operand]) => op.apply(operand),
            _ => Value::Void,
        }
    }
}

#[cfg(test)]
mod tests;
