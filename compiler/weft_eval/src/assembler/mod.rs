//! Generic lowering of syntax trees.
//!
//! The [`Assembler`] walks a [`Statement`] once, resolving every name
//! through a [`Scope`], and hands already-lowered children to a
//! [`Construct`] backend. Backends only build nodes; they never see names,
//! so every backend shares the same scoping rules.

use std::ops::Range;

use weft_ir::{Expression, Statement, StoreMode};
use weft_value::{Symbol, Value};

use crate::scope::Scope;

/// Node factory of an execution backend.
///
/// Each method receives the lowered children of one tree node, with names
/// replaced by resolved [`Symbol`]s.
pub trait Construct {
    type Expression;
    type Statement;

    fn expression_access(
        &mut self,
        source: Self::Expression,
        subscript: Self::Expression,
    ) -> Self::Expression;
    fn expression_constant(&mut self, value: Value) -> Self::Expression;
    fn expression_invoke(
        &mut self,
        callee: Self::Expression,
        arguments: Vec<Self::Expression>,
    ) -> Self::Expression;
    fn expression_map(&mut self, elements: Vec<(Self::Expression, Self::Expression)>)
        -> Self::Expression;
    fn expression_symbol(&mut self, symbol: Symbol) -> Self::Expression;
    fn expression_void(&mut self) -> Self::Expression;

    /// `arguments` are the parameter slots inside the function's own
    /// activation of `local_count` locals.
    fn statement_assign_function(
        &mut self,
        symbol: Symbol,
        arguments: Vec<Symbol>,
        local_count: usize,
        body: Self::Statement,
    ) -> Self::Statement;
    fn statement_assign_render(&mut self, symbol: Symbol, body: Self::Statement)
        -> Self::Statement;
    fn statement_assign_value(
        &mut self,
        symbol: Symbol,
        expression: Self::Expression,
    ) -> Self::Statement;
    /// A lexical block whose `locals` must read as void on every entry.
    fn statement_block(&mut self, locals: Range<usize>, body: Self::Statement) -> Self::Statement;
    /// Statements in execution order.
    fn statement_composite(&mut self, statements: Vec<Self::Statement>) -> Self::Statement;
    fn statement_dump(&mut self, expression: Self::Expression) -> Self::Statement;
    fn statement_echo(&mut self, expression: Self::Expression) -> Self::Statement;
    fn statement_for(
        &mut self,
        source: Self::Expression,
        key: Option<Symbol>,
        value: Symbol,
        body: Self::Statement,
        empty: Option<Self::Statement>,
    ) -> Self::Statement;
    /// Branches in order; the first truthy condition wins.
    fn statement_if(
        &mut self,
        branches: Vec<(Self::Expression, Self::Statement)>,
        fallback: Option<Self::Statement>,
    ) -> Self::Statement;
    fn statement_literal(&mut self, text: &str) -> Self::Statement;
    fn statement_none(&mut self) -> Self::Statement;
    fn statement_return(&mut self, expression: Self::Expression) -> Self::Statement;
    fn statement_unwrap(&mut self, body: Self::Statement) -> Self::Statement;
    fn statement_while(
        &mut self,
        condition: Self::Expression,
        body: Self::Statement,
    ) -> Self::Statement;
    fn statement_wrap(&mut self, modifier: Self::Expression, body: Self::Statement)
        -> Self::Statement;
}

/// Result of assembling a document.
pub struct Assembly<S> {
    pub root: S,
    /// Global names; a render supplies their values in this order.
    pub globals: Vec<String>,
    /// Locals of the render's own activation.
    pub local_count: usize,
}

/// Single-pass walker feeding a [`Construct`] backend.
pub struct Assembler<C> {
    construct: C,
    scope: Scope,
}

impl<C: Construct> Assembler<C> {
    pub fn new(construct: C) -> Self {
        Assembler {
            construct,
            scope: Scope::new(),
        }
    }

    /// Lower a whole document.
    pub fn assemble(mut self, statement: &Statement) -> Assembly<C::Statement> {
        let root = self.statement(statement);
        Assembly {
            root,
            local_count: self.scope.local_count(),
            globals: self.scope.into_globals(),
        }
    }

    fn expression(&mut self, expression: &Expression) -> C::Expression {
        weft_stack::guarded(|| self.expression_inner(expression))
    }

    fn expression_inner(&mut self, expression: &Expression) -> C::Expression {
        match expression {
            Expression::Access { source, subscript } => {
                let source = self.expression(source);
                let subscript = self.expression(subscript);
                self.construct.expression_access(source, subscript)
            }
            Expression::Constant(value) => self.construct.expression_constant(value.clone()),
            Expression::Invoke { callee, arguments } => {
                let callee = self.expression(callee);
                let arguments = arguments.iter().map(|a| self.expression(a)).collect();
                self.construct.expression_invoke(callee, arguments)
            }
            Expression::Map(elements) => {
                let elements = elements
                    .iter()
                    .map(|(key, value)| (self.expression(key), self.expression(value)))
                    .collect();
                self.construct.expression_map(elements)
            }
            Expression::Symbol(name) => {
                let symbol = self.scope.resolve(name, StoreMode::Global);
                self.construct.expression_symbol(symbol)
            }
            Expression::Void => self.construct.expression_void(),
        }
    }

    fn statement(&mut self, statement: &Statement) -> C::Statement {
        weft_stack::guarded(|| self.statement_inner(statement))
    }

    /// Lower `body` inside its own block.
    fn block(&mut self, body: &Statement) -> C::Statement {
        self.scope.enter();
        let body = self.statement(body);
        let locals = self.scope.leave();
        self.wrap_block(locals, body)
    }

    fn wrap_block(&mut self, locals: Range<usize>, body: C::Statement) -> C::Statement {
        if locals.is_empty() {
            body
        } else {
            self.construct.statement_block(locals, body)
        }
    }

    fn statement_inner(&mut self, statement: &Statement) -> C::Statement {
        match statement {
            Statement::AssignFunction {
                name,
                mode,
                arguments,
                body,
            } => {
                self.scope.push_function();
                let arguments = arguments.iter().map(|a| self.scope.declare(a)).collect();
                let body = self.statement(body);
                let local_count = self.scope.pop_function();

                // Resolved after the body: a local function is not visible
                // to itself.
                let symbol = self.scope.resolve(name, *mode);
                self.construct
                    .statement_assign_function(symbol, arguments, local_count, body)
            }
            Statement::AssignRender { name, mode, body } => {
                let body = self.block(body);
                let symbol = self.scope.resolve(name, *mode);
                self.construct.statement_assign_render(symbol, body)
            }
            Statement::AssignValue { name, mode, value } => {
                let expression = self.expression(value);
                let symbol = self.scope.resolve(name, *mode);
                self.construct.statement_assign_value(symbol, expression)
            }
            Statement::Composite(statements) => {
                let statements = statements.iter().map(|s| self.statement(s)).collect();
                self.construct.statement_composite(statements)
            }
            Statement::Dump(expression) => {
                let expression = self.expression(expression);
                self.construct.statement_dump(expression)
            }
            Statement::Echo(expression) => {
                let expression = self.expression(expression);
                self.construct.statement_echo(expression)
            }
            Statement::For {
                key,
                value,
                source,
                body,
                empty,
            } => {
                let source = self.expression(source);

                // Outer block: the loop variables. Inner block: the body,
                // reset on every iteration.
                self.scope.enter();
                let key = key.as_deref().map(|k| self.scope.resolve(k, StoreMode::Local));
                let value = self.scope.resolve(value, StoreMode::Local);
                let body = self.block(body);
                let empty = empty.as_deref().map(|empty| self.block(empty));
                self.scope.leave();

                self.construct.statement_for(source, key, value, body, empty)
            }
            Statement::If { .. } => self.if_chain(statement),
            Statement::Literal(text) => self.construct.statement_literal(text),
            Statement::None => self.construct.statement_none(),
            Statement::Return(expression) => {
                let expression = self.expression(expression);
                self.construct.statement_return(expression)
            }
            Statement::Unwrap(body) => {
                let body = self.block(body);
                self.construct.statement_unwrap(body)
            }
            Statement::While { condition, body } => {
                let condition = self.expression(condition);
                let body = self.block(body);
                self.construct.statement_while(condition, body)
            }
            Statement::Wrap { modifier, body } => {
                let modifier = self.expression(modifier);
                let body = self.block(body);
                self.construct.statement_wrap(modifier, body)
            }
        }
    }

    /// Flatten an `If` chain into its branches and final fallback.
    fn if_chain(&mut self, statement: &Statement) -> C::Statement {
        let mut branches = Vec::new();
        let mut current = Some(statement);
        let mut fallback = None;

        while let Some(node) = current {
            match node {
                Statement::If {
                    condition,
                    body,
                    next,
                } => {
                    let condition = self.expression(condition);
                    let body = self.block(body);
                    branches.push((condition, body));
                    current = next.as_deref();
                }
                other => {
                    fallback = Some(self.block(other));
                    current = None;
                }
            }
        }

        self.construct.statement_if(branches, fallback)
    }
}

/// Assemble `statement` with `construct`.
pub fn assemble<C: Construct>(construct: C, statement: &Statement) -> Assembly<C::Statement> {
    Assembler::new(construct).assemble(statement)
}
