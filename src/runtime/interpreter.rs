use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Expression, Program, Statement, UnaryOp};
use crate::runtime::{Environment, OutputSink, StdoutSink, Value};

/// Tree-walking interpreter
///
/// Walks the AST against one flat [`Environment`] and sends every executed
/// `print` to its [`OutputSink`] as one line.
///
/// The environment lives as long as the interpreter, so calling
/// [`Interpreter::interpret`] repeatedly on one instance keeps earlier
/// declarations visible.
pub struct Interpreter<S: OutputSink = StdoutSink> {
    env: Environment,
    sink: S,
}

impl Interpreter<StdoutSink> {
    /// Creates an interpreter printing to standard output
    pub fn new() -> Self {
        Interpreter::with_sink(StdoutSink)
    }
}

impl Default for Interpreter<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Interpreter<S> {
    /// Creates an interpreter writing program output to `sink`
    pub fn with_sink(sink: S) -> Self {
        Interpreter {
            env: Environment::new(),
            sink,
        }
    }

    /// Executes a program
    ///
    /// Returns the value of the last statement, or `None` when the program is
    /// empty or its last statement produces nothing (declarations,
    /// assignments, an `if` whose branch did not run).
    pub fn interpret(&mut self, program: &Program) -> Result<Option<Value>> {
        self.execute_sequence(&program.statements)
    }

    /// Variable table
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the interpreter, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn execute_sequence(&mut self, statements: &[Statement]) -> Result<Option<Value>> {
        let mut last = None;
        for statement in statements {
            last = self.execute_statement(statement)?;
        }
        Ok(last)
    }

    fn execute_statement(&mut self, stmt: &Statement) -> Result<Option<Value>> {
        match stmt {
            Statement::Block(statements) => self.execute_sequence(statements),

            Statement::VarDecl { name, init } => {
                let value = self.evaluate_expression(init)?;
                self.env.declare(name.clone(), value);
                Ok(None)
            }

            Statement::Assign { name, value } => {
                // The target is checked before its value runs
                if !self.env.contains(name) {
                    return Err(Error::undefined(name.as_str()));
                }
                let value = self.evaluate_expression(value)?;
                self.env.assign(name, value)?;
                Ok(None)
            }

            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate_expression(condition)?.is_truthy() {
                    self.execute_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch)
                } else {
                    Ok(None)
                }
            }

            Statement::While { condition, body } => {
                let mut last = None;
                while self.evaluate_expression(condition)?.is_truthy() {
                    last = self.execute_statement(body)?;
                }
                Ok(last)
            }

            Statement::Print(expr) => {
                let value = self.evaluate_expression(expr)?;
                self.sink.write_line(&value.to_string());
                Ok(Some(value))
            }

            Statement::Expression(expr) => self.evaluate_expression(expr).map(Some),
        }
    }

    fn evaluate_expression(&mut self, expr: &Expression) -> Result<Value> {
        match expr {
            Expression::Number(n) => Ok(Value::Number(*n)),
            Expression::String(s) => Ok(Value::String(s.clone())),
            Expression::Variable(name) => self.env.get(name),

            Expression::Unary { op, operand } => {
                let value = self.evaluate_expression(operand)?;
                Ok(apply_unary(*op, &value))
            }

            Expression::Binary { left, op, right } => {
                // Both sides always run; there is no short-circuiting
                let left = self.evaluate_expression(left)?;
                let right = self.evaluate_expression(right)?;
                Ok(apply_binary(*op, &left, &right))
            }
        }
    }
}

fn apply_unary(op: UnaryOp, value: &Value) -> Value {
    match op {
        UnaryOp::Plus => Value::Number(value.to_number()),
        UnaryOp::Neg => Value::Number(-value.to_number()),
    }
}

/// Applies a binary operator
///
/// `+` concatenates when either side is a string. The other arithmetic
/// operators are numeric over [`Value::to_number`]. Equality is strict: values
/// of different kinds are never equal. Ordering is lexicographic between two
/// strings and numeric otherwise, with `NaN` comparing false.
fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::Add => match (left, right) {
            (Value::String(_), _) | (_, Value::String(_)) => {
                Value::String(format!("{}{}", left, right))
            }
            _ => Value::Number(left.to_number() + right.to_number()),
        },
        BinaryOp::Sub => Value::Number(left.to_number() - right.to_number()),
        BinaryOp::Mul => Value::Number(left.to_number() * right.to_number()),
        BinaryOp::Div => Value::Number(left.to_number() / right.to_number()),
        BinaryOp::Eq => Value::Boolean(left == right),
        BinaryOp::NotEq => Value::Boolean(left != right),
        BinaryOp::Lt => Value::Boolean(compare(left, right) == Some(Ordering::Less)),
        BinaryOp::Gt => Value::Boolean(compare(left, right) == Some(Ordering::Greater)),
        BinaryOp::LtEq => Value::Boolean(matches!(
            compare(left, right),
            Some(Ordering::Less | Ordering::Equal)
        )),
        BinaryOp::GtEq => Value::Boolean(matches!(
            compare(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        )),
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => left.to_number().partial_cmp(&right.to_number()),
    }
}
