//! Error types for irc-input.
//!
//! `ClientError` covers application-level failures (configuration, I/O).
//! `DispatchError` is the taxonomy of problems reported inline into a buffer
//! while handling one line of user input; none of them abort the process.

use thiserror::Error;

/// Main error type for application-level operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias using ClientError.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Which command table a descriptor came from, used in arity messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// Client-internal command.
    Internal,
    /// IRC protocol command.
    Irc,
}

impl std::fmt::Display for CommandScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::Irc => write!(f, "IRC"),
        }
    }
}

/// Errors reported into the originating buffer while dispatching input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(
        "unknown command \"{0}\" (type /help for help). To send unknown commands to IRC server, enable option irc.send_unknown_commands"
    )]
    UnknownCommand(String),

    #[error("wrong argument count for {scope} command \"{name}\" (expected: {expected} arg{})", plural(.expected))]
    WrongArgCountExact {
        scope: CommandScope,
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("wrong argument count for {scope} command \"{name}\" (expected: between {min} and {max} arg{})", plural(.max))]
    WrongArgCountRange {
        scope: CommandScope,
        name: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("circular reference when calling alias \"/{0}\"")]
    CircularAlias(String),

    #[error("command \"{0}\" failed")]
    CommandFailed(String),

    #[error("command \"{0}\" needs a server connection!")]
    NeedsConnection(String),

    #[error("command \"{0}\" can not be executed on DCC CHAT buffer")]
    DccChatBuffer(String),

    #[error("you are not connected to server")]
    NotConnected,

    #[error("This window is not a channel!")]
    NotAChannel,

    #[error("DCC CHAT is closed")]
    DccChatClosed,
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Failure returned by a command handler.
///
/// The message is the handler's specific cause; the dispatcher prints it and
/// then reports [`DispatchError::CommandFailed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    /// Creates a handler error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
