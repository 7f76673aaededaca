use super::token::{Literal, Token, TokenKind};
use crate::error::{Error, Result};

/// On-demand lexer for Minilang source text
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the end of
/// input is reached every further call returns another `EOF` token. The lexer
/// is not restartable; tokenizing the same text again needs a fresh instance.
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Source code as character vector
    source: Vec<char>,
    /// Current position in source
    position: usize,
    /// Character under the cursor, `None` at end of input
    current: Option<char>,
    /// Set once the iterator has yielded `EOF` or an error
    exhausted: bool,
}

impl Lexer {
    /// Creates a new lexer over the given source text
    pub fn new(source: &str) -> Self {
        let source: Vec<char> = source.chars().collect();
        let current = source.first().copied();
        Lexer {
            source,
            position: 0,
            current,
            exhausted: false,
        }
    }

    /// Produces the next token
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let c = match self.current {
            Some(c) => c,
            None => return Ok(Token::eof()),
        };

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.identifier());
        }

        if c.is_ascii_digit() {
            return Ok(self.number());
        }

        if c == '"' {
            return Ok(self.string());
        }

        if let Some(kind) = self.two_char_operator(c) {
            self.advance();
            self.advance();
            let lexeme: String = [c, '='].iter().collect();
            return Ok(Token::new(kind, lexeme));
        }

        if let Some(kind) = TokenKind::symbol(c) {
            self.advance();
            return Ok(Token::new(kind, c.to_string()));
        }

        Err(Error::LexError { character: c })
    }

    /// Scans all remaining tokens, including the trailing `EOF`
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    fn two_char_operator(&self, c: char) -> Option<TokenKind> {
        if self.peek() != Some('=') {
            return None;
        }
        match c {
            '=' => Some(TokenKind::Equals),
            '!' => Some(TokenKind::NotEquals),
            '<' => Some(TokenKind::LessEquals),
            '>' => Some(TokenKind::GreaterEquals),
            _ => None,
        }
    }

    /// Skips ASCII whitespace, vertical tab included
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if c.is_ascii_whitespace() || c == '\x0B') {
            self.advance();
        }
    }

    fn identifier(&mut self) -> Token {
        let start = self.position;
        while matches!(self.current, Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = self.text_from(start);
        match TokenKind::keyword(&text) {
            Some(kind) => Token::new(kind, text),
            None => Token::new(TokenKind::Identifier, text),
        }
    }

    fn number(&mut self) -> Token {
        let start = self.position;
        self.consume_digits();

        // A trailing dot is part of the literal even without fraction digits
        let is_float = self.current == Some('.');
        if is_float {
            self.advance();
            self.consume_digits();
        }

        let text = self.text_from(start);
        let literal = if is_float {
            Literal::Float(text.parse().unwrap_or(f64::INFINITY))
        } else {
            match text.parse::<i64>() {
                Ok(n) => Literal::Integer(n),
                Err(_) => Literal::Float(text.parse().unwrap_or(f64::INFINITY)),
            }
        };

        Token::with_literal(TokenKind::Number, text, literal)
    }

    fn string(&mut self) -> Token {
        let start = self.position;
        self.advance(); // Opening "

        let mut value = String::new();
        while let Some(c) = self.current {
            if c == '"' {
                break;
            }
            value.push(c);
            self.advance();
        }

        // Unterminated strings run silently to end of input
        self.advance(); // Closing "

        let lexeme = self.text_from(start);
        Token::with_literal(TokenKind::String, lexeme, Literal::String(value))
    }

    fn consume_digits(&mut self) {
        while matches!(self.current, Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.position].iter().collect()
    }

    fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
        self.current = self.source.get(self.position).copied();
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.position + 1).copied()
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    /// Yields tokens up to and including `EOF`, or up to the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        match &token {
            Ok(t) if t.kind != TokenKind::Eof => {}
            _ => self.exhausted = true,
        }
        Some(token)
    }
}
