use super::ast::{BinaryOp, Expression, Program, Statement, UnaryOp};
use crate::error::{Error, Result};
use crate::lexer::{Lexer, Literal, Token, TokenKind};

/// Recursive-descent parser with a single token of lookahead
///
/// Grammar:
///
/// ```text
/// program    := statement* EOF
/// statement  := block | ifStmt | whileStmt | varDecl | printStmt | assignStmt | expr
/// block      := '{' statement* '}'
/// ifStmt     := 'if' '(' expr ')' statement ('else' statement)?
/// whileStmt  := 'while' '(' expr ')' statement
/// varDecl    := 'let' IDENT '=' expr
/// printStmt  := 'print' expr
/// assignStmt := IDENT '=' expr
/// expr       := term (('+'|'-'|'=='|'!='|'<'|'>'|'<='|'>=') term)*
/// term       := factor (('*'|'/') factor)*
/// factor     := ('+'|'-') factor | NUMBER | STRING | IDENT | '(' expr ')'
/// ```
///
/// Additive and comparison operators deliberately share one precedence tier.
/// Semicolons are dropped as they are pulled from the lexer, so they may
/// appear anywhere whitespace may.
///
/// Statements and factors together may nest at most [`MAX_NESTING_DEPTH`]
/// levels; deeper input is a `SyntaxError`.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    depth: usize,
}

/// Deepest statement/factor nesting the parser accepts
pub const MAX_NESTING_DEPTH: usize = 256;

impl Parser {
    /// Creates a parser, pulling the first token from `lexer`
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = Self::pull(&mut lexer)?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parses the whole token stream into a program
    pub fn parse(&mut self) -> Result<Program> {
        let program = self.program()?;

        if !self.check(TokenKind::Eof) {
            return Err(self.error());
        }

        Ok(program)
    }

    fn program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::Eof) {
            statements.push(self.statement()?);
        }

        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Statement> {
        self.nested(Self::statement_kind)
    }

    fn statement_kind(&mut self) -> Result<Statement> {
        match self.current.kind {
            TokenKind::LeftBrace => self.block(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Let => self.var_declaration(),
            TokenKind::Print => self.print_statement(),
            TokenKind::Identifier => self.identifier_statement(),
            _ => Ok(Statement::Expression(self.expr()?)),
        }
    }

    fn block(&mut self) -> Result<Statement> {
        self.eat(TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) {
            statements.push(self.statement()?);
        }

        self.eat(TokenKind::RightBrace)?;
        Ok(Statement::Block(statements))
    }

    fn if_statement(&mut self) -> Result<Statement> {
        self.eat(TokenKind::If)?;
        let condition = self.parenthesized_condition()?;
        let then_branch = Box::new(self.statement()?);

        let else_branch = if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else)?;
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Statement> {
        self.eat(TokenKind::While)?;
        let condition = self.parenthesized_condition()?;
        let body = Box::new(self.statement()?);

        Ok(Statement::While { condition, body })
    }

    fn parenthesized_condition(&mut self) -> Result<Expression> {
        self.eat(TokenKind::LeftParen)?;
        let condition = self.expr()?;
        self.eat(TokenKind::RightParen)?;
        Ok(condition)
    }

    fn var_declaration(&mut self) -> Result<Statement> {
        self.eat(TokenKind::Let)?;
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        self.eat(TokenKind::Assign)?;
        let init = self.expr()?;

        Ok(Statement::VarDecl { name, init })
    }

    fn print_statement(&mut self) -> Result<Statement> {
        self.eat(TokenKind::Print)?;
        Ok(Statement::Print(self.expr()?))
    }

    /// A leading identifier is either an assignment target or the leftmost
    /// operand of an expression statement; the token after it decides.
    fn identifier_statement(&mut self) -> Result<Statement> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;

        if self.check(TokenKind::Assign) {
            self.eat(TokenKind::Assign)?;
            let value = self.expr()?;
            return Ok(Statement::Assign { name, value });
        }

        let left = self.term_rest(Expression::Variable(name))?;
        Ok(Statement::Expression(self.expr_rest(left)?))
    }

    fn expr(&mut self) -> Result<Expression> {
        let node = self.term()?;
        self.expr_rest(node)
    }

    fn expr_rest(&mut self, mut node: Expression) -> Result<Expression> {
        while let Some(op) = self.current_binary_op(BinaryOp::is_additive_tier) {
            self.advance()?;
            let right = self.term()?;
            node = Expression::binary(node, op, right);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Expression> {
        let node = self.factor()?;
        self.term_rest(node)
    }

    fn term_rest(&mut self, mut node: Expression) -> Result<Expression> {
        while let Some(op) = self.current_binary_op(BinaryOp::is_multiplicative_tier) {
            self.advance()?;
            let right = self.factor()?;
            node = Expression::binary(node, op, right);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<Expression> {
        self.nested(Self::factor_kind)
    }

    fn factor_kind(&mut self) -> Result<Expression> {
        if let Some(op) = UnaryOp::from_token_kind(self.current.kind) {
            self.advance()?;
            let operand = self.factor()?;
            return Ok(Expression::unary(op, operand));
        }

        match self.current.kind {
            TokenKind::Number => {
                let value = self
                    .current
                    .literal
                    .as_ref()
                    .and_then(Literal::as_number)
                    .ok_or_else(|| self.error())?;
                self.advance()?;
                Ok(Expression::Number(value))
            }
            TokenKind::String => match self.advance()?.literal {
                Some(Literal::String(s)) => Ok(Expression::String(s)),
                _ => Err(Error::syntax(TokenKind::String)),
            },
            TokenKind::Identifier => {
                let name = self.advance()?.lexeme;
                Ok(Expression::Variable(name))
            }
            TokenKind::LeftParen => {
                self.eat(TokenKind::LeftParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RightParen)?;
                Ok(node)
            }
            _ => Err(self.error()),
        }
    }

    /// Runs `rule` one nesting level deeper
    fn nested<T>(&mut self, rule: fn(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error());
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn current_binary_op(&self, tier: fn(&BinaryOp) -> bool) -> Option<BinaryOp> {
        BinaryOp::from_token_kind(self.current.kind).filter(|op| tier(op))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has the expected kind
    fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error())
        }
    }

    /// Moves to the next token and returns the one just left behind
    fn advance(&mut self) -> Result<Token> {
        let next = Self::pull(&mut self.lexer)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn pull(lexer: &mut Lexer) -> Result<Token> {
        loop {
            let token = lexer.next_token()?;
            if token.kind != TokenKind::Semicolon {
                return Ok(token);
            }
        }
    }

    fn error(&self) -> Error {
        Error::syntax(self.current.kind)
    }
}

/// Lexes and parses `source` into a program
pub fn parse(source: &str) -> Result<Program> {
    Parser::new(Lexer::new(source))?.parse()
}
