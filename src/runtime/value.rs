use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Double-precision number
    Number(f64),
    /// String value
    String(String),
    /// Boolean value, produced by comparisons
    Boolean(bool),
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Returns true if the value is truthy in a condition
    ///
    /// Zero, `NaN`, the empty string and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
        }
    }

    /// Numeric view of the value used by arithmetic and ordering
    ///
    /// Booleans are 1 or 0. Strings are trimmed; empty text is 0, decimal
    /// text parses, anything else is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::String(s) => parse_numeric_text(s),
        }
    }

    /// Returns the string contents if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) =>
        {
            text.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

fn format_number(n: f64, f: &mut fmt::Formatter) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else {
        if n < 0.0 {
            write!(f, "-")?;
        }
        format_magnitude(n.abs(), f)
    }
}

/// Lays out the shortest round-trip digits of a positive finite `n`
///
/// Plain decimal notation is used while the decimal point sits within 21
/// digits of the first digit and no more than 6 zeros follow it; outside
/// that range the form is `1e+21`, `1.5e-7`.
fn format_magnitude(n: f64, f: &mut fmt::Formatter) -> fmt::Result {
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let len = digits.len() as i32;
    let point = exponent + 1;

    if len <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(f, "{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", lead, sign, exponent.abs())
        } else {
            write!(f, "{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => format_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
