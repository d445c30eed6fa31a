//! irc-input - the input dispatch pipeline of an IRC client.
//!
//! This library exposes the core modules for the binary and for integration
//! tests.

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod session;
