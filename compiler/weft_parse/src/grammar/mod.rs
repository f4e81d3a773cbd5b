//! Grammar rules, as `impl Parser` blocks split by syntactic category.

mod expression;
mod statement;
