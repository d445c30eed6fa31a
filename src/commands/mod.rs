//! Command pipeline.
//!
//! A line of user input is classified, commands are resolved against plugin
//! handlers, aliases and the two command tables, and chat text goes through
//! the outbound segmenter.

pub mod alias;
pub mod classifier;
pub mod definitions;
pub mod dispatcher;
pub mod expander;
pub mod handlers;
pub mod help;
pub mod registry;
pub mod segmenter;
pub mod tokenizer;

pub use classifier::{classify, LineKind};
pub use dispatcher::{exec_command, user_input};
pub use registry::{CommandSource, Registry, Resolved};
pub use tokenizer::{tokenize, validate, ArgVector};
