//! Runtime execution for Minilang programs

mod environment;
mod interpreter;
mod output;
mod value;

pub use environment::Environment;
pub use interpreter::Interpreter;
pub use output::{OutputSink, StdoutSink};
pub use value::Value;
