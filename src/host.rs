//! Host-facing evaluation contract
//!
//! Editors, HTTP endpoints and CLI runners embed the language through these
//! functions. Each call runs a fresh interpreter with captured output, so
//! nothing is shared between evaluations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::parser::parse;
use crate::runtime::{Interpreter, Value};

/// Everything a single run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Lines printed before the run finished or failed
    pub output: Vec<String>,
    /// Value of the last statement when the run succeeded
    pub value: Option<Value>,
    /// The error that stopped the run, if any
    pub error: Option<Error>,
}

impl RunOutcome {
    /// True when the run finished without an error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Serializable evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Lines printed before the run finished or failed
    pub output_lines: Vec<String>,
    /// Value of the last statement
    pub result: Option<Value>,
    /// Error message
    pub error: Option<String>,
    /// Error classification
    pub error_kind: Option<ErrorKind>,
}

impl From<RunOutcome> for Evaluation {
    fn from(outcome: RunOutcome) -> Self {
        Evaluation {
            output_lines: outcome.output,
            result: outcome.value,
            error_kind: outcome.error.as_ref().map(Error::kind),
            error: outcome.error.map(|e| e.to_string()),
        }
    }
}

/// JSON body accepted by the evaluation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Program source text
    pub expression: String,
}

/// Lexes, parses and interprets `source`
///
/// Output printed before a failure is kept; execution is not transactional.
pub fn run(source: &str) -> RunOutcome {
    tracing::trace!(source_len = source.len(), "running program");

    let mut output = Vec::new();
    let result =
        parse(source).and_then(|program| Interpreter::with_sink(&mut output).interpret(&program));

    let (value, error) = match result {
        Ok(value) => (value, None),
        Err(e) => (None, Some(e)),
    };

    tracing::debug!(
        lines = output.len(),
        result = value.as_ref().map_or("none", crate::runtime::Value::type_name),
        error = ?error.as_ref().map(Error::kind),
        "evaluation finished"
    );

    RunOutcome {
        output,
        value,
        error,
    }
}

/// Runs `source` and flattens the outcome for serialization
pub fn evaluate(source: &str) -> Evaluation {
    run(source).into()
}

/// Handles a raw JSON request body, returning the JSON response body
///
/// Malformed JSON is reported as a `serde_json::Error`; program errors are
/// part of the successful response.
pub fn handle_request(body: &str) -> serde_json::Result<String> {
    let request: EvaluateRequest = serde_json::from_str(body)?;
    let evaluation = evaluate(&request.expression);
    tracing::debug!(error = evaluation.error.is_some(), "request handled");
    serde_json::to_string(&evaluation)
}
