//! # Minilang - A Minimal Imperative Scripting Language
//!
//! A small imperative language with variables, `if`/`else`, `while` and
//! `print`, implemented as a classic three-stage pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use minilang::{Interpreter, Lexer, Parser, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = r#"
//!     let sum = 0; let i = 1;
//!     while (i <= 5) { sum = sum + i; i = i + 1; }
//!     print "Sum is:";
//!     print sum;
//! "#;
//!
//! // Tokens are pulled lazily by the parser
//! let mut parser = Parser::new(Lexer::new(code))?;
//! let program = parser.parse()?;
//!
//! // Capture printed lines instead of writing to stdout
//! let mut interpreter = Interpreter::with_sink(Vec::new());
//! let result = interpreter.interpret(&program)?;
//!
//! assert_eq!(result, Some(Value::Number(15.0)));
//! assert_eq!(interpreter.into_sink(), vec!["Sum is:", "15"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Host contract
//!
//! Embedders that only need output and an error message use [`host::run`] or
//! [`host::evaluate`]:
//!
//! ```rust
//! let evaluation = minilang::evaluate("print 10 / 4; x = 1");
//! assert_eq!(evaluation.output_lines, vec!["2.5"]);
//! assert_eq!(evaluation.error.as_deref(), Some("Variable 'x' is not defined"));
//! ```
//!
//! ## Language Overview
//!
//! - **Values**: numbers (double precision), strings, booleans
//! - **Statements**: `let x = e`, `x = e`, `print e`, `if (c) s else s`,
//!   `while (c) s`, `{ ... }`, bare expressions
//! - **Operators**: `* /` bind tighter than `+ - == != < > <= >=`, which all
//!   share one left-associative tier
//! - **Scope**: one flat global scope; blocks do not introduce scopes
//! - Semicolons are optional and ignored
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → AST → Interpreter → Output + Value
//! ```
//!
//! - [`Lexer`] - Produces tokens on demand
//! - [`Parser`] - Recursive descent into a [`Program`]
//! - [`Interpreter`] - Executes the AST against an [`Environment`]
//! - [`OutputSink`] - Receives one line per executed `print`
//!
//! ## Error Handling
//!
//! Three fatal error kinds, see [`Error`]: `LexError`, `SyntaxError` and
//! `NameError`.

/// Version of the Minilang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod host;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use host::{evaluate, run, Evaluation, RunOutcome};
pub use lexer::{tokenize, Lexer, Literal, Token, TokenKind};
pub use parser::{parse, BinaryOp, Expression, Parser, Program, Statement, UnaryOp};
pub use runtime::{Environment, Interpreter, OutputSink, StdoutSink, Value};

/// Type alias for the lexer.
/// Converts raw source text into tokens for the parser.
pub type Scanner = Lexer;

/// Type alias for the interpreter.
/// Executes the AST and produces runtime values.
pub type Evaluator<S = StdoutSink> = Interpreter<S>;
