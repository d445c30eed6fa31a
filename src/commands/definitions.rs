//! Command descriptor tables.
//!
//! Two static tables describe every command the client knows: internal
//! commands and IRC protocol commands. Both are consumed by dispatch, `/help`
//! and completion. They are immutable for the life of the process.

use crate::commands::handlers::{builtin, protocol, HandlerResult};
use crate::commands::tokenizer::ArgVector;
use crate::session::ExecutionContext;

/// Upper bound used for "any number of arguments".
pub const MAX_ARGS: usize = 8192;

/// Handler receiving tokenized arguments.
pub type ArgsHandler = fn(&mut ExecutionContext<'_>, &ArgVector) -> HandlerResult;

/// Handler receiving the argument string as one piece.
pub type TextHandler = fn(&mut ExecutionContext<'_>, Option<&str>) -> HandlerResult;

/// How a command's handler takes its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityMode {
    /// Arguments are split into a vector.
    ArgVector,
    /// Arguments are passed as one string.
    SingleString,
}

/// Handler reference. The variant fixes the arity mode.
#[derive(Clone, Copy)]
pub enum Handler {
    Args(ArgsHandler),
    Text(TextHandler),
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Args(_) => write!(f, "Handler::Args"),
            Self::Text(_) => write!(f, "Handler::Text"),
        }
    }
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// Command name (without leading /).
    pub name: &'static str,
    /// One-line description shown in help.
    pub description: &'static str,
    /// Syntax summary.
    pub arguments: &'static str,
    /// Long description of the arguments.
    pub arguments_description: &'static str,
    /// Completion template consumed by the completion engine.
    pub completion: &'static str,
    /// Minimum number of tokenized arguments (inclusive).
    pub min_arg: usize,
    /// Maximum number of tokenized arguments (inclusive).
    pub max_arg: usize,
    /// Whether a connected server is required.
    pub needs_connection: bool,
    /// Whether arguments go through colour encoding before use.
    pub colorize_args: bool,
    /// Handler, `None` for receive-only placeholder entries.
    pub handler: Option<Handler>,
}

impl CommandDescriptor {
    /// Arity mode implied by the handler; placeholders report `ArgVector`.
    pub fn arity_mode(&self) -> ArityMode {
        match self.handler {
            Some(Handler::Text(_)) => ArityMode::SingleString,
            _ => ArityMode::ArgVector,
        }
    }

    /// Returns true when the entry can be executed.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

/// Internal commands, sorted by name.
pub static BUILTIN_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "alias",
        description: "create an alias for a command",
        arguments: "[alias_name [command [arguments]]]",
        arguments_description: "alias_name: name of alias\n   \
            command: command name (internal or IRC command, many commands can be separated by semicolons)\n \
            arguments: arguments for command\n\n\
            Note: in command, special variables $1, $2,..,$9 are replaced by arguments given by user, \
            and $* is replaced by all arguments.\n\
            Variables $nick, $channel and $server are replaced by current nick/channel/server.",
        completion: "%- %A",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: false,
        colorize_args: true,
        handler: Some(Handler::Text(builtin::alias)),
    },
    CommandDescriptor {
        name: "builtin",
        description: "launch internal/IRC builtin command (do not look at plugins handlers or aliases)",
        arguments: "command",
        arguments_description: "command: command to execute (a '/' is automatically added if not found at beginning of command)",
        completion: "%w|%i",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: false,
        colorize_args: true,
        handler: Some(Handler::Text(builtin::builtin)),
    },
    CommandDescriptor {
        name: "help",
        description: "display help about commands",
        arguments: "[command]",
        arguments_description: "command: name of an internal or IRC command",
        completion: "%w|%i|%h",
        min_arg: 0,
        max_arg: 1,
        needs_connection: false,
        colorize_args: false,
        handler: Some(Handler::Args(builtin::help)),
    },
    CommandDescriptor {
        name: "set",
        description: "set input options",
        arguments: "[option [value]]",
        arguments_description: "option: irc.send_unknown_commands or irc.colors_send\n \
            value: on or off (no value displays the current value)",
        completion: "%o %v",
        min_arg: 0,
        max_arg: 2,
        needs_connection: false,
        colorize_args: false,
        handler: Some(Handler::Args(builtin::set)),
    },
    CommandDescriptor {
        name: "unalias",
        description: "remove an alias",
        arguments: "alias_name",
        arguments_description: "alias_name: name of alias to remove",
        completion: "%a",
        min_arg: 1,
        max_arg: 1,
        needs_connection: false,
        colorize_args: false,
        handler: Some(Handler::Text(builtin::unalias)),
    },
];

/// IRC protocol commands. Entries without a handler are receive-only.
pub static PROTOCOL_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "away",
        description: "toggle away status",
        arguments: "[message]",
        arguments_description: "message: message for away (if no message is given, away status is removed)",
        completion: "",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::away)),
    },
    CommandDescriptor {
        name: "error",
        description: "error received from IRC server",
        arguments: "",
        arguments_description: "",
        completion: "",
        min_arg: 0,
        max_arg: 0,
        needs_connection: false,
        colorize_args: false,
        handler: None,
    },
    CommandDescriptor {
        name: "join",
        description: "join a channel",
        arguments: "channel[,channel] [key[,key]]",
        arguments_description: "channel: channel name to join\n    key: key to join the channel",
        completion: "%C",
        min_arg: 1,
        max_arg: 2,
        needs_connection: true,
        colorize_args: false,
        handler: Some(Handler::Args(protocol::join)),
    },
    CommandDescriptor {
        name: "me",
        description: "send a CTCP action to the current channel",
        arguments: "message",
        arguments_description: "message: message to send",
        completion: "",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::me)),
    },
    CommandDescriptor {
        name: "msg",
        description: "send message to a nick or channel",
        arguments: "receiver[,receiver] text",
        arguments_description: "receiver: nick or channel (may be mask, '*' = current channel)\n    \
            text: text to send",
        completion: "%n",
        min_arg: 2,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::msg)),
    },
    CommandDescriptor {
        name: "nick",
        description: "change current nickname",
        arguments: "nickname",
        arguments_description: "nickname: new nickname for current IRC server",
        completion: "",
        min_arg: 1,
        max_arg: 1,
        needs_connection: true,
        colorize_args: false,
        handler: Some(Handler::Args(protocol::nick)),
    },
    CommandDescriptor {
        name: "notice",
        description: "send notice message to user",
        arguments: "nickname text",
        arguments_description: "nickname: user to send notice to\n    text: text to send",
        completion: "%n",
        min_arg: 2,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::notice)),
    },
    CommandDescriptor {
        name: "part",
        description: "leave a channel",
        arguments: "[channel[,channel]] [part_message]",
        arguments_description: "     channel: channel name to leave\n\
            part_message: part message (displayed to other users)",
        completion: "",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::part)),
    },
    CommandDescriptor {
        name: "quit",
        description: "close all connections and quit",
        arguments: "[quit_message]",
        arguments_description: "quit_message: quit message (displayed to other users)",
        completion: "",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: false,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::quit)),
    },
    CommandDescriptor {
        name: "quote",
        description: "send raw data to server without parsing",
        arguments: "data",
        arguments_description: "data: raw data to send",
        completion: "",
        min_arg: 1,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: false,
        handler: Some(Handler::Text(protocol::quote)),
    },
    CommandDescriptor {
        name: "topic",
        description: "get/set channel topic",
        arguments: "[channel] [topic]",
        arguments_description: "channel: channel name\ntopic: new topic for channel \
            (if topic is \"-delete\" then topic is deleted)",
        completion: "%t|-delete %-",
        min_arg: 0,
        max_arg: MAX_ARGS,
        needs_connection: true,
        colorize_args: true,
        handler: Some(Handler::Text(protocol::topic)),
    },
    CommandDescriptor {
        name: "001",
        description: "a server message",
        arguments: "",
        arguments_description: "",
        completion: "",
        min_arg: 0,
        max_arg: 0,
        needs_connection: false,
        colorize_args: false,
        handler: None,
    },
    CommandDescriptor {
        name: "005",
        description: "a server message",
        arguments: "",
        arguments_description: "",
        completion: "",
        min_arg: 0,
        max_arg: 0,
        needs_connection: false,
        colorize_args: false,
        handler: None,
    },
    CommandDescriptor {
        name: "353",
        description: "list of nicks on channel",
        arguments: "",
        arguments_description: "",
        completion: "",
        min_arg: 0,
        max_arg: 0,
        needs_connection: false,
        colorize_args: false,
        handler: None,
    },
    CommandDescriptor {
        name: "366",
        description: "end of /names list",
        arguments: "",
        arguments_description: "",
        completion: "",
        min_arg: 0,
        max_arg: 0,
        needs_connection: false,
        colorize_args: false,
        handler: None,
    },
];

/// Finds an internal command by name, ignoring ASCII case.
pub fn find_builtin(name: &str) -> Option<&'static CommandDescriptor> {
    BUILTIN_COMMANDS
        .iter()
        .find(|cmd| cmd.name.eq_ignore_ascii_case(name))
}

/// Finds an executable IRC command by name, ignoring ASCII case.
///
/// Placeholder entries without a handler never match.
pub fn find_protocol(name: &str) -> Option<&'static CommandDescriptor> {
    PROTOCOL_COMMANDS
        .iter()
        .find(|cmd| cmd.has_handler() && cmd.name.eq_ignore_ascii_case(name))
}
