//! Argument tokenizer and arity validation.
//!
//! Arguments are split on runs of whitespace. There is no quoting or escape
//! processing at this layer; handlers that need the raw text use
//! [`ArgVector::raw`].

use crate::commands::definitions::CommandDescriptor;
use crate::error::{CommandScope, DispatchError};

/// Tokenized command arguments plus the original argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<String>,
    raw: Option<String>,
}

impl ArgVector {
    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true when there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// All tokens in order.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// The unsplit argument string, `None` when the command had no arguments.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

/// Splits an argument string into whitespace-delimited tokens.
pub fn tokenize(raw_args: Option<&str>) -> ArgVector {
    let args = raw_args
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    ArgVector {
        args,
        raw: raw_args.map(str::to_string),
    }
}

/// Argument count outside a descriptor's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    pub min: usize,
    pub max: usize,
    pub actual: usize,
}

impl ArityError {
    /// Converts to the message shown in the buffer.
    pub fn into_dispatch_error(self, scope: CommandScope, name: &str) -> DispatchError {
        if self.min == self.max {
            DispatchError::WrongArgCountExact {
                scope,
                name: name.to_string(),
                expected: self.max,
                actual: self.actual,
            }
        } else {
            DispatchError::WrongArgCountRange {
                scope,
                name: name.to_string(),
                min: self.min,
                max: self.max,
                actual: self.actual,
            }
        }
    }
}

/// Checks the token count against the descriptor's inclusive bounds.
pub fn validate(descriptor: &CommandDescriptor, argv: &ArgVector) -> Result<(), ArityError> {
    let actual = argv.len();
    if actual < descriptor.min_arg || actual > descriptor.max_arg {
        return Err(ArityError {
            min: descriptor.min_arg,
            max: descriptor.max_arg,
            actual,
        });
    }
    Ok(())
}
