use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// The single global variable table
///
/// Minilang has exactly one scope. Blocks, `if` and `while` bodies all share
/// it, so a variable declared inside a block stays visible after the block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds a variable, silently replacing any previous binding
    pub fn declare(&mut self, name: String, value: Value) {
        self.variables.insert(name, value);
    }

    /// Overwrites an existing variable
    pub fn assign(&mut self, name: &str, value: Value) -> Result<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::undefined(name)),
        }
    }

    /// Gets the value of a variable by name
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::undefined(name))
    }

    /// Checks if a variable exists
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when nothing has been declared
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }
}
