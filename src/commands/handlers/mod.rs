//! Command handlers.
//!
//! Each handler receives the execution context and its arguments (tokenized
//! or as one string, depending on the table entry) and returns a result.
//! Arity and connection checks have already passed when a handler runs.

pub mod builtin;
pub mod protocol;

use crate::error::HandlerError;

/// Result of a command handler.
pub type HandlerResult = Result<(), HandlerError>;

/// Returns true if `name` starts with an IRC channel prefix.
pub fn is_channel_name(name: &str) -> bool {
    name.starts_with(['#', '&', '+', '!'])
}
