use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (identifier names live here)
    pub lexeme: String,
    /// Parsed literal value for numbers and strings
    pub literal: Option<Literal>,
}

impl Token {
    /// Creates a new token without a literal value
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
        }
    }

    /// Creates a new token carrying a literal value
    pub fn with_literal(kind: TokenKind, lexeme: impl Into<String>, literal: Literal) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
        }
    }

    /// End of input marker
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

/// Literal payload of a `NUMBER` or `STRING` token
///
/// Integer versus float only records how the literal was written; the
/// language itself has a single number type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Number written without a decimal point
    Integer(i64),
    /// Number written with a decimal point
    Float(f64),
    /// Raw string contents, quotes stripped
    String(String),
}

impl Literal {
    /// Numeric value of a number literal
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Integer(n) => Some(*n as f64),
            Literal::Float(f) => Some(*f),
            Literal::String(_) => None,
        }
    }
}

/// All possible token types in Minilang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Keywords
    /// IF keyword
    If,
    /// ELSE keyword
    Else,
    /// WHILE keyword
    While,
    /// FOR keyword (reserved, no grammar rule uses it)
    For,
    /// LET keyword
    Let,
    /// PRINT keyword
    Print,
    /// RETURN keyword (reserved, no grammar rule uses it)
    Return,

    // Identifiers and literals
    /// Identifier
    Identifier,
    /// Number literal
    Number,
    /// String literal
    String,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Multiply operator (*)
    Multiply,
    /// Divide operator (/)
    Divide,
    /// Assignment operator (=)
    Assign,
    /// Equality operator (==)
    Equals,
    /// Inequality operator (!=)
    NotEquals,
    /// Less than operator (<)
    Less,
    /// Greater than operator (>)
    Greater,
    /// Less than or equal operator (<=)
    LessEquals,
    /// Greater than or equal operator (>=)
    GreaterEquals,

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Semicolon, lexed but ignored by the grammar
    Semicolon,
    /// Comma, lexed but unused by the grammar
    Comma,

    // Special
    /// End of file marker
    Eof,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("if", TokenKind::If);
        m.insert("else", TokenKind::Else);
        m.insert("while", TokenKind::While);
        m.insert("for", TokenKind::For);
        m.insert("let", TokenKind::Let);
        m.insert("print", TokenKind::Print);
        m.insert("return", TokenKind::Return);
        m
    };
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Let
                | TokenKind::Print
                | TokenKind::Return
        )
    }

    /// Get keyword from string
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get(s).copied()
    }

    /// Single-character operator or punctuation
    pub fn symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ';' => TokenKind::Semicolon,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Assign,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Let => "LET",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEquals => "LESS_EQUALS",
            TokenKind::GreaterEquals => "GREATER_EQUALS",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
