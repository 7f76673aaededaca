use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::TokenKind;

/// Complete Minilang program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Program {
    /// Top-level statements in the program
    pub statements: Vec<Statement>,
}

/// Statements
///
/// None of these introduce a scope: every statement reads and writes the one
/// global environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Braced statement list: `{ ... }`
    Block(Vec<Statement>),

    /// Variable declaration: `let name = init`
    VarDecl {
        /// Name of the variable to bind
        name: String,
        /// Initial value expression
        init: Expression,
    },

    /// Assignment to an existing variable: `name = value`
    Assign {
        /// Name of the variable to overwrite
        name: String,
        /// Expression value to assign
        value: Expression,
    },

    /// If statement
    If {
        /// Condition expression to evaluate
        condition: Expression,
        /// Statement to execute if condition is truthy
        then_branch: Box<Statement>,
        /// Optional statement to execute otherwise
        else_branch: Option<Box<Statement>>,
    },

    /// While loop
    While {
        /// Loop condition expression
        condition: Expression,
        /// Loop body
        body: Box<Statement>,
    },

    /// Print statement: `print expr`
    Print(Expression),

    /// Expression statement
    Expression(Expression),
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Variable reference
    Variable(String),

    /// Binary operation
    Binary {
        /// Left operand
        left: Box<Expression>,
        /// Operator
        op: BinaryOp,
        /// Right operand
        right: Box<Expression>,
    },

    /// Unary operation
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        operand: Box<Expression>,
    },

    /// Number literal
    Number(f64),

    /// String literal
    String(String),
}

impl Expression {
    /// Builds a binary node
    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Builds a unary node
    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition or concatenation (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Equality (==)
    Eq,
    /// Inequality (!=)
    NotEq,
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than or equal (>=)
    GtEq,
}

impl BinaryOp {
    /// Maps an operator token to its binary operator
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Multiply => BinaryOp::Mul,
            TokenKind::Divide => BinaryOp::Div,
            TokenKind::Equals => BinaryOp::Eq,
            TokenKind::NotEquals => BinaryOp::NotEq,
            TokenKind::Less => BinaryOp::Lt,
            TokenKind::Greater => BinaryOp::Gt,
            TokenKind::LessEquals => BinaryOp::LtEq,
            TokenKind::GreaterEquals => BinaryOp::GtEq,
            _ => return None,
        };
        Some(op)
    }

    /// Operators of the loose tier: additive and every comparison
    pub fn is_additive_tier(&self) -> bool {
        !self.is_multiplicative_tier()
    }

    /// Operators of the tight tier: `*` and `/`
    pub fn is_multiplicative_tier(&self) -> bool {
        matches!(self, BinaryOp::Mul | BinaryOp::Div)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Numeric identity (+)
    Plus,
    /// Numeric negation (-)
    Neg,
}

impl UnaryOp {
    /// Maps a sign token to its unary operator
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}

impl fmt::Display for Expression {
    /// Fully parenthesized rendering, handy for checking how a tree grouped
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Unary { op, operand } => write!(f, "({}{})", op, operand),
            Expression::Number(n) => write!(f, "{}", n),
            Expression::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_mapping() {
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Plus), Some(BinaryOp::Add));
        assert_eq!(
            BinaryOp::from_token_kind(TokenKind::GreaterEquals),
            Some(BinaryOp::GtEq)
        );
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Assign), None);
        assert_eq!(UnaryOp::from_token_kind(TokenKind::Minus), Some(UnaryOp::Neg));
        assert_eq!(UnaryOp::from_token_kind(TokenKind::Multiply), None);
    }

    #[test]
    fn test_precedence_tiers() {
        assert!(BinaryOp::Mul.is_multiplicative_tier());
        assert!(BinaryOp::Div.is_multiplicative_tier());
        assert!(BinaryOp::Lt.is_additive_tier());
        assert!(BinaryOp::Eq.is_additive_tier());
        assert!(BinaryOp::Sub.is_additive_tier());
    }

    #[test]
    fn test_expression_display() {
        let expr = Expression::binary(
            Expression::unary(UnaryOp::Neg, Expression::Variable("x".into())),
            BinaryOp::Mul,
            Expression::Number(2.5),
        );
        assert_eq!(expr.to_string(), "((-x) * 2.5)");
    }
}
