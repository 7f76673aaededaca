//! Minilang Parser Module
//!
//! Parses the token stream into an Abstract Syntax Tree (AST).

mod ast;
#[allow(clippy::module_inception)]
mod parser;

pub use ast::{BinaryOp, Expression, Program, Statement, UnaryOp};
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
