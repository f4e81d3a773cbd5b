//! Expression executors.

use std::mem;

use weft_value::{Frame, Output, Symbol, Value};

/// Lowered expression of the tree-walking backend.
#[derive(Debug)]
pub enum ExpressionExecutor {
    Access {
        source: Box<ExpressionExecutor>,
        subscript: Box<ExpressionExecutor>,
    },
    Constant(Value),
    Invoke {
        callee: Box<ExpressionExecutor>,
        arguments: Vec<ExpressionExecutor>,
    },
    Map(Vec<(ExpressionExecutor, ExpressionExecutor)>),
    Symbol(Symbol),
}

impl ExpressionExecutor {
    /// Evaluate against `frame`.
    ///
    /// Never fails: a missing key, an unset symbol or a call to a value
    /// that is not a function all evaluate to void.
    pub fn evaluate(&self, frame: &mut Frame<'_>, output: &mut dyn Output) -> Value {
        weft_stack::guarded(|| self.evaluate_inner(frame, output))
    }

    fn evaluate_inner(&self, frame: &mut Frame<'_>, output: &mut dyn Output) -> Value {
        match self {
            ExpressionExecutor::Access { source, subscript } => {
                let source = source.evaluate(frame, output);
                let subscript = subscript.evaluate(frame, output);
                source.get(&subscript)
            }
            ExpressionExecutor::Constant(value) => value.clone(),
            ExpressionExecutor::Invoke { callee, arguments } => {
                let callee = callee.evaluate(frame, output);
                let Some(function) = callee.as_function() else {
                    return Value::Void;
                };
                let arguments: Vec<Value> = arguments
                    .iter()
                    .map(|argument| argument.evaluate(frame, output))
                    .collect();
                function.invoke(frame, &arguments, output)
            }
            ExpressionExecutor::Map(elements) => {
                let mut pairs = Vec::with_capacity(elements.len());
                for (key, value) in elements {
                    let key = key.evaluate(frame, output);
                    let value = value.evaluate(frame, output);
                    pairs.push((key, value));
                }
                Value::dictionary(pairs)
            }
            ExpressionExecutor::Symbol(symbol) => frame.get(*symbol),
        }
    }

    fn detach_children(&mut self, pending: &mut Vec<ExpressionExecutor>) {
        let void = || ExpressionExecutor::Constant(Value::Void);
        match self {
            ExpressionExecutor::Access { source, subscript } => {
                pending.push(mem::replace(&mut **source, void()));
                pending.push(mem::replace(&mut **subscript, void()));
            }
            ExpressionExecutor::Invoke { callee, arguments } => {
                pending.push(mem::replace(&mut **callee, void()));
                pending.append(arguments);
            }
            ExpressionExecutor::Map(elements) => {
                pending.extend(elements.drain(..).flat_map(|(key, value)| [key, value]));
            }
            ExpressionExecutor::Constant(_) | ExpressionExecutor::Symbol(_) => {}
        }
    }
}

impl Drop for ExpressionExecutor {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expression) = pending.pop() {
            expression.detach_children(&mut pending);
        }
    }
}
