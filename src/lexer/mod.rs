//! Lexical analysis for Minilang
//!
//! Converts source text into a pull-based stream of tokens.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Literal, Token, TokenKind};

/// Starts lazily tokenizing `source`
///
/// The returned lexer is an iterator of `Result<Token>` that ends after the
/// trailing `EOF` token, or after the first lexical error.
pub fn tokenize(source: &str) -> Lexer {
    Lexer::new(source)
}
