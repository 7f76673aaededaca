//! Error types for the Minilang interpreter

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lexer::TokenKind;

/// Minilang errors
///
/// Every error is fatal to the current run: nothing retries or recovers, the
/// error travels unchanged up to whoever called [`crate::host::run`] or the
/// individual pipeline stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Character that cannot start any token
    ///
    /// **Triggered by:** Characters outside the token alphabet
    /// **Example:** `let x = @`
    #[error("Invalid character: {character}")]
    LexError {
        /// The offending character
        character: char,
    },

    /// Token stream does not match the grammar
    ///
    /// **Triggered by:** An unexpected token in any production, or tokens left
    /// over after a complete program
    /// **Example:** `let = 5`, `(1 + 2`
    #[error("Invalid syntax")]
    SyntaxError {
        /// Kind of the token the parser was looking at
        found: TokenKind,
    },

    /// Reference to, or assignment to, an undeclared variable
    ///
    /// **Triggered by:** Reading or assigning a name that no `let` has bound
    /// **Example:** `x = 1` (when `let x` never ran)
    /// **Prevention:** Declare variables with `let x = value` before use
    #[error("Variable '{name}' is not defined")]
    NameError {
        /// Variable name
        name: String,
    },
}

/// Coarse error classification for hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Lexical error
    Lex,
    /// Grammar error
    Syntax,
    /// Undefined variable
    Name,
}

impl Error {
    /// Create a syntax error for the token kind the parser stopped at
    pub fn syntax(found: TokenKind) -> Self {
        Error::SyntaxError { found }
    }

    /// Create a name error for the given variable
    pub fn undefined(name: impl Into<String>) -> Self {
        Error::NameError { name: name.into() }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexError { .. } => ErrorKind::Lex,
            Error::SyntaxError { .. } => ErrorKind::Syntax,
            Error::NameError { .. } => ErrorKind::Name,
        }
    }
}

/// Result type for Minilang operations
pub type Result<T> = std::result::Result<T, Error>;
