//! Tree-walking backend.
//!
//! [`Interpreter`] is the [`Construct`] implementation that turns assembled
//! nodes into executors; executors evaluate directly against a [`Frame`].
//!
//! [`Frame`]: weft_value::Frame

mod expression;
mod function;
mod statement;

use std::ops::Range;

use weft_value::{Symbol, Value};

use crate::assembler::Construct;

pub use expression::ExpressionExecutor;
pub use function::TemplateFunction;
pub use statement::StatementExecutor;

/// Builds [`ExpressionExecutor`] and [`StatementExecutor`] trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter;

impl Construct for Interpreter {
    type Expression = ExpressionExecutor;
    type Statement = StatementExecutor;

    fn expression_access(
        &mut self,
        source: ExpressionExecutor,
        subscript: ExpressionExecutor,
    ) -> ExpressionExecutor {
        ExpressionExecutor::Access {
            source: Box::new(source),
            subscript: Box::new(subscript),
        }
    }

    fn expression_constant(&mut self, value: Value) -> ExpressionExecutor {
        ExpressionExecutor::Constant(value)
    }

    fn expression_invoke(
        &mut self,
        callee: ExpressionExecutor,
        arguments: Vec<ExpressionExecutor>,
    ) -> ExpressionExecutor {
        ExpressionExecutor::Invoke {
            callee: Box::new(callee),
            arguments,
        }
    }

    fn expression_map(
        &mut self,
        elements: Vec<(ExpressionExecutor, ExpressionExecutor)>,
    ) -> ExpressionExecutor {
        ExpressionExecutor::Map(elements)
    }

    fn expression_symbol(&mut self, symbol: Symbol) -> ExpressionExecutor {
        ExpressionExecutor::Symbol(symbol)
    }

    fn expression_void(&mut self) -> ExpressionExecutor {
        ExpressionExecutor::Constant(Value::Void)
    }

    fn statement_assign_function(
        &mut self,
        symbol: Symbol,
        arguments: Vec<Symbol>,
        local_count: usize,
        body: StatementExecutor,
    ) -> StatementExecutor {
        StatementExecutor::AssignFunction {
            symbol,
            function: Value::function(TemplateFunction::new(arguments, local_count, body)),
        }
    }

    fn statement_assign_render(
        &mut self,
        symbol: Symbol,
        body: StatementExecutor,
    ) -> StatementExecutor {
        StatementExecutor::AssignRender {
            symbol,
            body: Box::new(body),
        }
    }

    fn statement_assign_value(
        &mut self,
        symbol: Symbol,
        expression: ExpressionExecutor,
    ) -> StatementExecutor {
        StatementExecutor::AssignValue { symbol, expression }
    }

    fn statement_block(&mut self, locals: Range<usize>, body: StatementExecutor) -> StatementExecutor {
        StatementExecutor::Block {
            locals,
            body: Box::new(body),
        }
    }

    /// Nested composites flatten into one list; `None` parts are dropped.
    fn statement_composite(&mut self, statements: Vec<StatementExecutor>) -> StatementExecutor {
        let mut flat = Vec::with_capacity(statements.len());
        for mut statement in statements {
            if let StatementExecutor::Composite(inner) = &mut statement {
                flat.append(inner);
            } else if !matches!(statement, StatementExecutor::None) {
                flat.push(statement);
            }
        }
        StatementExecutor::Composite(flat)
    }

    fn statement_dump(&mut self, expression: ExpressionExecutor) -> StatementExecutor {
        StatementExecutor::Dump(expression)
    }

    fn statement_echo(&mut self, expression: ExpressionExecutor) -> StatementExecutor {
        StatementExecutor::Echo(expression)
    }

    fn statement_for(
        &mut self,
        source: ExpressionExecutor,
        key: Option<Symbol>,
        value: Symbol,
        body: StatementExecutor,
        empty: Option<StatementExecutor>,
    ) -> StatementExecutor {
        StatementExecutor::For {
            source,
            key,
            value,
            body: Box::new(body),
            empty: empty.map(Box::new),
        }
    }

    fn statement_if(
        &mut self,
        branches: Vec<(ExpressionExecutor, StatementExecutor)>,
        fallback: Option<StatementExecutor>,
    ) -> StatementExecutor {
        StatementExecutor::If {
            branches,
            fallback: fallback.map(Box::new),
        }
    }

    fn statement_literal(&mut self, text: &str) -> StatementExecutor {
        StatementExecutor::Literal(text.to_owned())
    }

    fn statement_none(&mut self) -> StatementExecutor {
        StatementExecutor::None
    }

    fn statement_return(&mut self, expression: ExpressionExecutor) -> StatementExecutor {
        StatementExecutor::Return(expression)
    }

    fn statement_unwrap(&mut self, body: StatementExecutor) -> StatementExecutor {
        StatementExecutor::Unwrap(Box::new(body))
    }

    fn statement_while(
        &mut self,
        condition: ExpressionExecutor,
        body: StatementExecutor,
    ) -> StatementExecutor {
        StatementExecutor::While {
            condition,
            body: Box::new(body),
        }
    }

    fn statement_wrap(
        &mut self,
        modifier: ExpressionExecutor,
        body: StatementExecutor,
    ) -> StatementExecutor {
        StatementExecutor::Wrap {
            modifier,
            body: Box::new(body),
        }
    }
}
