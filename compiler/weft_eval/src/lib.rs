//! Weft Eval - from syntax trees to rendered text.
//!
//! The back end of the engine:
//! - `scope`: compile-time resolution of names to global and local slots
//! - `assembler`: one generic pass lowering a [`Statement`] through a
//!   [`Construct`] backend
//! - `interpreter`: the tree-walking backend
//! - `program`: an assembled document ready to render
//! - `store`: the [`Store`] capability supplying global values
//! - `builtins`: host functions registered as globals
//!
//! Rendering never fails. Missing names, missing keys and calls to values
//! that are not functions all evaluate to void.
//!
//! [`Statement`]: weft_ir::Statement

pub mod assembler;
pub mod builtins;
pub mod interpreter;
mod program;
mod scope;
pub mod store;

pub use assembler::{assemble, Assembler, Assembly, Construct};
pub use interpreter::{ExpressionExecutor, Interpreter, StatementExecutor, TemplateFunction};
pub use program::Program;
pub use scope::Scope;
pub use store::{Access, MonitorStore, SimpleStore, Store};
