//! Execution context for the input pipeline.
//!
//! The server, buffer, transport, display and plugin layers are external to
//! this crate. They are reached only through the small types and traits here,
//! so the dispatcher can be driven by the binary or by test fakes alike.

use serde::Serialize;

use crate::commands::registry::Registry;
use crate::error::DispatchError;

/// Snapshot of the server the input was entered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    /// Internal server name.
    pub name: String,
    /// Our current nick on this server.
    pub nick: String,
    /// Whether the connection is registered and usable.
    pub connected: bool,
}

impl ServerInfo {
    /// Creates a connected server.
    pub fn new(name: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            connected: true,
        }
    }

    /// Marks the server as disconnected.
    pub fn disconnected(self) -> Self {
        Self {
            connected: false,
            ..self
        }
    }
}

/// Kind of buffer the input was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Server console.
    Server,
    /// A joined channel.
    Channel,
    /// Private conversation with one nick.
    Private,
    /// Raw peer-to-peer chat session.
    DccChat {
        /// Whether the peer socket is still open.
        open: bool,
    },
}

/// The buffer the input was entered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferInfo {
    /// Channel name, peer nick, or server name for a server buffer.
    pub name: String,
    /// Buffer kind.
    pub kind: BufferKind,
}

impl BufferInfo {
    /// A server console buffer.
    pub fn server(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BufferKind::Server,
        }
    }

    /// A channel buffer.
    pub fn channel(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BufferKind::Channel,
        }
    }

    /// A private conversation buffer.
    pub fn private(nick: impl Into<String>) -> Self {
        Self {
            name: nick.into(),
            kind: BufferKind::Private,
        }
    }

    /// A DCC chat buffer.
    pub fn dcc_chat(nick: impl Into<String>, open: bool) -> Self {
        Self {
            name: nick.into(),
            kind: BufferKind::DccChat { open },
        }
    }

    /// Returns true for a server console buffer.
    pub fn is_server(&self) -> bool {
        self.kind == BufferKind::Server
    }

    /// Returns true for a DCC chat buffer, open or not.
    pub fn is_dcc_chat(&self) -> bool {
        matches!(self.kind, BufferKind::DccChat { .. })
    }

    /// Channel or private target name, if the buffer has one.
    pub fn target(&self) -> Option<&str> {
        match self.kind {
            BufferKind::Channel | BufferKind::Private | BufferKind::DccChat { .. } => {
                Some(&self.name)
            }
            BufferKind::Server => None,
        }
    }
}

/// One line written into the originating buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputLine {
    /// Informational message.
    Info { text: String },
    /// Error message.
    Error { text: String },
    /// Local echo of a message we sent.
    Message { nick: String, text: String },
    /// Local echo of an action (`/me`) we sent.
    Action { nick: String, text: String },
}

impl OutputLine {
    /// Creates an info line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info { text: text.into() }
    }

    /// Creates an error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }
}

/// Outbound side of the server connection.
pub trait Transport {
    /// Enqueues one protocol line (without CRLF) for sending.
    fn queue_line(&mut self, line: &str);

    /// Sends one line directly on a DCC chat socket.
    fn send_dcc_chat(&mut self, peer: &str, text: &str);
}

/// Display side: receives everything written into the buffer.
pub trait Frontend {
    /// Writes one line into the originating buffer.
    fn print(&mut self, line: OutputLine);
}

/// Result of offering a command to plugin handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// A plugin handled the command successfully.
    Handled,
    /// A plugin handled the command and reported failure.
    Failed,
    /// No plugin handles this command.
    NotFound,
}

/// Description of a plugin-provided command, for `/help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCommand {
    /// Command name without slash.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Syntax summary.
    pub arguments: String,
    /// Long description of the arguments.
    pub arguments_description: String,
}

/// Plugin/scripting bridge as seen by the input pipeline.
pub trait PluginHooks {
    /// "user-input" modifier. `None` means no modifier changed the line,
    /// `Some("")` drops it, anything else replaces it.
    fn modify_input(&mut self, server: &str, line: &str) -> Option<String>;

    /// Offers a command to plugin command handlers.
    fn run_command(&mut self, server: &str, command: &str, args: Option<&str>) -> HookOutcome;

    /// Commands registered by plugins.
    fn commands(&self) -> Vec<PluginCommand> {
        Vec::new()
    }
}

/// Hooks implementation for a client without plugins.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl PluginHooks for NoHooks {
    fn modify_input(&mut self, _server: &str, _line: &str) -> Option<String> {
        None
    }

    fn run_command(&mut self, _server: &str, _command: &str, _args: Option<&str>) -> HookOutcome {
        HookOutcome::NotFound
    }
}

/// Runtime switches consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSettings {
    /// Forward unresolved commands to the server as raw lines.
    pub send_unknown_commands: bool,
    /// Keep colour codes in outgoing text.
    pub colors_send: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            send_unknown_commands: false,
            colors_send: true,
        }
    }
}

/// Everything one input event is dispatched against.
pub struct Session {
    /// Alias table and command tables.
    pub registry: Registry,
    /// Runtime switches.
    pub settings: InputSettings,
    /// Active server, if any.
    pub server: Option<ServerInfo>,
    /// Buffer the input was entered in.
    pub buffer: BufferInfo,
    /// Outbound queue.
    pub transport: Box<dyn Transport>,
    /// Buffer display.
    pub frontend: Box<dyn Frontend>,
    /// Plugin bridge.
    pub hooks: Box<dyn PluginHooks>,
}

impl Session {
    /// Creates a session with default settings, the standard command tables
    /// and no plugins.
    pub fn new(
        server: Option<ServerInfo>,
        buffer: BufferInfo,
        transport: Box<dyn Transport>,
        frontend: Box<dyn Frontend>,
    ) -> Self {
        Self {
            registry: Registry::new(),
            settings: InputSettings::default(),
            server,
            buffer,
            transport,
            frontend,
            hooks: Box::new(NoHooks),
        }
    }

    /// Replaces the plugin bridge.
    pub fn with_hooks(self, hooks: Box<dyn PluginHooks>) -> Self {
        Self { hooks, ..self }
    }

    /// Replaces the runtime settings.
    pub fn with_settings(self, settings: InputSettings) -> Self {
        Self { settings, ..self }
    }

    /// Name of the active server, or an empty string.
    pub fn server_name(&self) -> &str {
        self.server.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Returns true when a server is present and connected.
    pub fn is_connected(&self) -> bool {
        self.server.as_ref().is_some_and(|s| s.connected)
    }
}

/// Per-call view of a [`Session`].
///
/// `only_builtin` bypasses plugin handlers and aliases; it is set by
/// `/builtin` and inherited by every nested dispatch.
pub struct ExecutionContext<'a> {
    pub session: &'a mut Session,
    pub only_builtin: bool,
}

impl<'a> ExecutionContext<'a> {
    /// Creates a context for user-entered input.
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            only_builtin: false,
        }
    }

    /// Reborrows this context with `only_builtin` set.
    pub fn builtin_only(&mut self) -> ExecutionContext<'_> {
        ExecutionContext {
            session: &mut *self.session,
            only_builtin: true,
        }
    }

    /// Writes an info line into the buffer.
    pub fn info(&mut self, text: impl Into<String>) {
        self.session.frontend.print(OutputLine::info(text));
    }

    /// Writes an error line into the buffer.
    pub fn error(&mut self, text: impl Into<String>) {
        self.session.frontend.print(OutputLine::error(text));
    }

    /// Reports a dispatch error into the buffer.
    pub fn report(&mut self, err: &DispatchError) {
        tracing::debug!(error = %err, "dispatch error");
        self.error(err.to_string());
    }

    /// Enqueues one protocol line.
    pub fn queue(&mut self, line: impl AsRef<str>) {
        self.session.transport.queue_line(line.as_ref());
    }
}
