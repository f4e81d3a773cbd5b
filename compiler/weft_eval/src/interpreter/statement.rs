//! Statement executors.

use std::mem;
use std::ops::Range;

use weft_value::{Frame, Output, Symbol, Value};

use super::ExpressionExecutor;

/// Lowered statement of the tree-walking backend.
///
/// Executing a statement returns `Some` when a `return` ended the current
/// activation early.
#[derive(Debug)]
pub enum StatementExecutor {
    /// Stores a prebuilt template function.
    AssignFunction {
        symbol: Symbol,
        function: Value,
    },
    AssignRender {
        symbol: Symbol,
        body: Box<StatementExecutor>,
    },
    AssignValue {
        symbol: Symbol,
        expression: ExpressionExecutor,
    },
    /// Resets `locals` before running `body`.
    Block {
        locals: Range<usize>,
        body: Box<StatementExecutor>,
    },
    Composite(Vec<StatementExecutor>),
    Dump(ExpressionExecutor),
    Echo(ExpressionExecutor),
    For {
        source: ExpressionExecutor,
        key: Option<Symbol>,
        value: Symbol,
        body: Box<StatementExecutor>,
        empty: Option<Box<StatementExecutor>>,
    },
    If {
        branches: Vec<(ExpressionExecutor, StatementExecutor)>,
        fallback: Option<Box<StatementExecutor>>,
    },
    Literal(String),
    None,
    Return(ExpressionExecutor),
    Unwrap(Box<StatementExecutor>),
    While {
        condition: ExpressionExecutor,
        body: Box<StatementExecutor>,
    },
    Wrap {
        modifier: ExpressionExecutor,
        body: Box<StatementExecutor>,
    },
}

impl StatementExecutor {
    pub fn execute(&self, frame: &mut Frame<'_>, output: &mut dyn Output) -> Option<Value> {
        weft_stack::guarded(|| self.execute_inner(frame, output))
    }

    fn execute_inner(&self, frame: &mut Frame<'_>, output: &mut dyn Output) -> Option<Value> {
        match self {
            StatementExecutor::AssignFunction { symbol, function } => {
                frame.set(*symbol, function.clone());
                None
            }
            StatementExecutor::AssignRender { symbol, body } => {
                // A `return` only ends the capture.
                let mut buffer = String::new();
                body.execute(frame, &mut buffer);
                frame.set(*symbol, Value::from(buffer));
                None
            }
            StatementExecutor::AssignValue { symbol, expression } => {
                let value = expression.evaluate(frame, output);
                frame.set(*symbol, value);
                None
            }
            StatementExecutor::Block { locals, body } => {
                frame.clear(locals.clone());
                body.execute(frame, output)
            }
            StatementExecutor::Composite(statements) => statements
                .iter()
                .find_map(|statement| statement.execute(frame, output)),
            StatementExecutor::Dump(expression) => {
                let value = expression.evaluate(frame, output);
                output.write(&value.to_string());
                None
            }
            StatementExecutor::Echo(expression) => {
                let value = expression.evaluate(frame, output);
                frame.echo(&value, output);
                None
            }
            StatementExecutor::For {
                source,
                key,
                value,
                body,
                empty,
            } => {
                let source = source.evaluate(frame, output);
                let map = source.as_map().filter(|map| !map.is_empty());
                let Some(map) = map else {
                    return empty.as_ref().and_then(|empty| empty.execute(frame, output));
                };
                for (pair_key, pair_value) in map.pairs() {
                    if let Some(key) = key {
                        frame.set(*key, pair_key);
                    }
                    frame.set(*value, pair_value);
                    if let Some(result) = body.execute(frame, output) {
                        return Some(result);
                    }
                }
                None
            }
            StatementExecutor::If { branches, fallback } => {
                for (condition, body) in branches {
                    if condition.evaluate(frame, output).as_boolean() {
                        return body.execute(frame, output);
                    }
                }
                fallback.as_ref().and_then(|fallback| fallback.execute(frame, output))
            }
            StatementExecutor::Literal(text) => {
                output.write(text);
                None
            }
            StatementExecutor::None => None,
            StatementExecutor::Return(expression) => Some(expression.evaluate(frame, output)),
            StatementExecutor::Unwrap(body) => frame.unwrapped(|frame| body.execute(frame, output)),
            StatementExecutor::While { condition, body } => {
                while condition.evaluate(frame, output).as_boolean() {
                    if let Some(result) = body.execute(frame, output) {
                        return Some(result);
                    }
                }
                None
            }
            StatementExecutor::Wrap { modifier, body } => {
                let modifier = modifier.evaluate(frame, output);
                frame.wrap(modifier, |frame| body.execute(frame, output))
            }
        }
    }

    /// Move child statements into `pending`, leaving `None` behind.
    fn detach_children(&mut self, pending: &mut Vec<StatementExecutor>) {
        match self {
            StatementExecutor::AssignRender { body, .. }
            | StatementExecutor::Block { body, .. }
            | StatementExecutor::Unwrap(body)
            | StatementExecutor::While { body, .. }
            | StatementExecutor::Wrap { body, .. } => {
                pending.push(mem::replace(&mut **body, StatementExecutor::None));
            }
            StatementExecutor::Composite(statements) => pending.append(statements),
            StatementExecutor::For { body, empty, .. } => {
                pending.push(mem::replace(&mut **body, StatementExecutor::None));
                pending.extend(empty.take().map(|empty| *empty));
            }
            StatementExecutor::If { branches, fallback } => {
                pending.extend(branches.drain(..).map(|(_, body)| body));
                pending.extend(fallback.take().map(|fallback| *fallback));
            }
            StatementExecutor::AssignFunction { .. }
            | StatementExecutor::AssignValue { .. }
            | StatementExecutor::Dump(_)
            | StatementExecutor::Echo(_)
            | StatementExecutor::Literal(_)
            | StatementExecutor::None
            | StatementExecutor::Return(_) => {}
        }
    }
}

impl Drop for StatementExecutor {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut statement) = pending.pop() {
            statement.detach_children(&mut pending);
        }
    }
}
