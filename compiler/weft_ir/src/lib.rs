//! Weft IR - tokens and syntax trees.
//!
//! This crate holds the data shared by the front end and the assembler:
//! - [`Location`] for diagnostics
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - [`Expression`] and [`Statement`], the two mutually recursive trees the
//!   parser builds and the assembler lowers
//!
//! Trees own their children through `Box`/`Vec`; they are acyclic and never
//! mutated after parsing.

pub mod ast;
mod location;
mod token;

pub use ast::{Expression, Statement, StoreMode};
pub use location::Location;
pub use token::{Token, TokenKind};
