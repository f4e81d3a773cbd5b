//! Syntax trees.
//!
//! Two mutually recursive trees: [`Expression`] produces values,
//! [`Statement`] produces output and control flow. Names are kept as plain
//! strings; the assembler resolves them to slots.
//!
//! Operators have no node of their own: `a + b` is an [`Expression::Invoke`]
//! of a constant operator function, built with [`Expression::binary`].
//!
//! Both trees drop iteratively: a template may nest blocks or chain unary
//! operators far deeper than the thread stack allows recursive drop glue.

use std::{fmt, mem};

use weft_value::operators::{BinaryOperator, UnaryOperator};
use weft_value::Value;

/// Where an assignment stores its value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StoreMode {
    /// Document-wide: the closest enclosing local if one exists in the
    /// current function, else the global slot.
    #[default]
    Global,
    /// The innermost block only.
    Local,
    /// Like `Global` at compile time; stores set it without shadowing an
    /// existing binding.
    Private,
}

impl StoreMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "global" => Some(StoreMode::Global),
            "local" => Some(StoreMode::Local),
            "private" => Some(StoreMode::Private),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            StoreMode::Global => "global",
            StoreMode::Local => "local",
            StoreMode::Private => "private",
        }
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Value-producing node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Expression {
    /// `source[subscript]` or `source.name`.
    Access {
        source: Box<Expression>,
        subscript: Box<Expression>,
    },
    Constant(Value),
    /// `callee(arguments...)`.
    Invoke {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// Map literal; pairs in source order.
    Map(Vec<(Expression, Expression)>),
    /// Unresolved name.
    Symbol(String),
    #[default]
    Void,
}

impl Expression {
    pub fn access(source: Expression, subscript: Expression) -> Self {
        Expression::Access {
            source: Box::new(source),
            subscript: Box::new(subscript),
        }
    }

    pub fn invoke(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Invoke {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::invoke(Expression::Constant(op.function()), vec![left, right])
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::invoke(Expression::Constant(op.function()), vec![operand])
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(name.into())
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    fn detach_children(&mut self, pending: &mut Vec<Expression>) {
        match self {
            Expression::Access { source, subscript } => {
                pending.push(mem::take(&mut **source));
                pending.push(mem::take(&mut **subscript));
            }
            Expression::Invoke { callee, arguments } => {
                pending.push(mem::take(&mut **callee));
                pending.append(arguments);
            }
            Expression::Map(elements) => {
                pending.extend(elements.drain(..).flat_map(|(key, value)| [key, value]));
            }
            Expression::Constant(_) | Expression::Symbol(_) | Expression::Void => {}
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expression) = pending.pop() {
            expression.detach_children(&mut pending);
        }
    }
}

/// Effectful or control-flow node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Statement {
    /// `define name(arguments) ... end`.
    AssignFunction {
        name: String,
        mode: StoreMode,
        arguments: Vec<String>,
        body: Box<Statement>,
    },
    /// `capture name ... end`: stores the body's output as a string.
    AssignRender {
        name: String,
        mode: StoreMode,
        body: Box<Statement>,
    },
    AssignValue {
        name: String,
        mode: StoreMode,
        value: Expression,
    },
    /// Statements run in order; never nested directly in another composite.
    Composite(Vec<Statement>),
    Dump(Expression),
    Echo(Expression),
    For {
        key: Option<String>,
        value: String,
        source: Expression,
        body: Box<Statement>,
        /// Runs instead of `body` when the source map is empty.
        empty: Option<Box<Statement>>,
    },
    If {
        condition: Expression,
        body: Box<Statement>,
        /// Next `If` of the chain or the final fallback.
        next: Option<Box<Statement>>,
    },
    Literal(String),
    #[default]
    None,
    Return(Expression),
    Unwrap(Box<Statement>),
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    Wrap {
        modifier: Expression,
        body: Box<Statement>,
    },
}

impl Statement {
    /// Join `statements` into one composite.
    ///
    /// Empty input is [`Statement::None`]; a single statement is returned
    /// unchanged. Nested composites are spliced in place.
    pub fn sequence(statements: Vec<Statement>) -> Self {
        let mut flat = Vec::with_capacity(statements.len());
        for mut statement in statements {
            if let Statement::Composite(inner) = &mut statement {
                flat.append(inner);
            } else if !matches!(statement, Statement::None) {
                flat.push(statement);
            }
        }
        if flat.len() > 1 {
            Statement::Composite(flat)
        } else {
            flat.pop().unwrap_or_default()
        }
    }

    /// The statements of a composite, in order.
    pub fn parts(&self) -> Vec<&Statement> {
        match self {
            Statement::Composite(statements) => statements.iter().collect(),
            Statement::None => Vec::new(),
            other => vec![other],
        }
    }

    /// Move child statements into `pending`, leaving `None` behind.
    fn detach_children(&mut self, pending: &mut Vec<Statement>) {
        match self {
            Statement::AssignFunction { body, .. }
            | Statement::AssignRender { body, .. }
            | Statement::Unwrap(body)
            | Statement::While { body, .. }
            | Statement::Wrap { body, .. } => pending.push(mem::take(&mut **body)),
            Statement::Composite(statements) => pending.append(statements),
            Statement::For { body, empty, .. } => {
                pending.push(mem::take(&mut **body));
                pending.extend(empty.take().map(|empty| *empty));
            }
            Statement::If { body, next, .. } => {
                pending.push(mem::take(&mut **body));
                pending.extend(next.take().map(|next| *next));
            }
            Statement::AssignValue { .. }
            | Statement::Dump(_)
            | Statement::Echo(_)
            | Statement::Literal(_)
            | Statement::None
            | Statement::Return(_) => {}
        }
    }
}

impl Drop for Statement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut statement) = pending.pop() {
            statement.detach_children(&mut pending);
        }
    }
}

#[cfg(test)]
mod tests;
