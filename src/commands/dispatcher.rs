//! Input dispatch.
//!
//! [`user_input`] is the entry point for one line typed by the user. It runs
//! the "user-input" modifier, splits the result on newlines and routes each
//! segment either to [`exec_command`] or to the message path.

use tracing::{debug, info};

use crate::colors;
use crate::commands::alias::{replace_vars, ContextVars};
use crate::commands::classifier::{classify, LineKind};
use crate::commands::definitions::{CommandDescriptor, Handler};
use crate::commands::expander;
use crate::commands::registry::{CommandSource, Resolved};
use crate::commands::segmenter;
use crate::commands::tokenizer::{tokenize, validate};
use crate::error::{CommandScope, DispatchError};
use crate::session::{ExecutionContext, HookOutcome, Session};

/// A `/name args` line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// Command name without the slash.
    pub name: &'a str,
    /// Argument string, `None` when empty.
    pub args: Option<&'a str>,
}

/// Splits a command line. Trailing spaces are ignored, the name ends at the
/// first space and leading spaces of the arguments are skipped.
pub fn parse_command_line(line: &str) -> Option<CommandLine<'_>> {
    let body = line.strip_prefix('/')?.trim_end_matches(' ');
    let (name, args) = match body.split_once(' ') {
        Some((name, args)) => (name, Some(args.trim_start_matches(' '))),
        None => (body, None),
    };
    Some(CommandLine {
        name,
        args: args.filter(|a| !a.is_empty()),
    })
}

/// Prefixes `text` with `/` unless it already starts with one.
pub fn with_slash(text: &str) -> String {
    if text.starts_with('/') {
        text.to_string()
    } else {
        format!("/{text}")
    }
}

/// Values for `$nick`, `$channel` and `$server` in this session.
pub fn context_vars(session: &Session) -> ContextVars<'_> {
    ContextVars {
        nick: session.server.as_ref().map(|s| s.nick.as_str()),
        channel: session.buffer.target(),
        server: session.server.as_ref().map(|s| s.name.as_str()),
    }
}

/// Handles one line of user input.
///
/// The modifier may drop the line (empty result) or replace it; every
/// newline-separated segment of the result is then handled on its own, and an
/// error in one segment never stops the following ones.
pub fn user_input(ctx: &mut ExecutionContext<'_>, line: &str) {
    if line.is_empty() || line.starts_with(['\r', '\n']) {
        return;
    }

    let server = ctx.session.server_name().to_string();
    let modified = ctx
        .session
        .hooks
        .modify_input(&server, line)
        .filter(|new_line| new_line != line);

    let text = match modified.as_deref() {
        Some("") => {
            debug!("input dropped by modifier");
            return;
        }
        Some(new_line) => {
            debug!(original = line, replaced = new_line, "input replaced by modifier");
            new_line
        }
        None => line,
    };

    for segment in text.split('\n').filter(|s| !s.is_empty()) {
        dispatch_line(ctx, segment);
    }
}

/// Routes one segment to the command or message path.
pub fn dispatch_line(ctx: &mut ExecutionContext<'_>, line: &str) {
    match classify(line) {
        LineKind::Command => {
            exec_command(ctx, line);
        }
        LineKind::Message => segmenter::send_message(ctx, line),
    }
}

/// Executes one command line.
///
/// Resolution order is plugin handlers, aliases, internal commands, then IRC
/// commands; plugin handlers and aliases are skipped when `only_builtin` is
/// set. Returns true when a source claimed the command, even if its handler
/// was not run because of an arity error.
pub fn exec_command(ctx: &mut ExecutionContext<'_>, line: &str) -> bool {
    let Some(CommandLine { name, args }) = parse_command_line(line) else {
        return false;
    };

    if !ctx.only_builtin {
        let hook_args = args.map(|a| replace_vars(a, &context_vars(ctx.session)));
        let server = ctx.session.server_name().to_string();
        match ctx
            .session
            .hooks
            .run_command(&server, name, hook_args.as_deref())
        {
            HookOutcome::Handled => {
                debug!(command = name, source = ?CommandSource::OverrideHook, "command handled");
                return true;
            }
            HookOutcome::Failed => {
                ctx.report(&DispatchError::CommandFailed(name.to_string()));
                return true;
            }
            HookOutcome::NotFound => {}
        }
    }

    let Some(resolved) = ctx.session.registry.resolve(name, ctx.only_builtin) else {
        unknown_command(ctx, name, args);
        return false;
    };
    debug!(command = name, source = ?resolved.source(), "command resolved");

    match resolved {
        Resolved::Alias(alias) => expander::expand_and_run(ctx, &alias, args),
        Resolved::Builtin(cmd) => run_command(ctx, cmd, CommandScope::Internal, name, args),
        Resolved::Protocol(cmd) => run_command(ctx, cmd, CommandScope::Irc, name, args),
    }
}

/// Validates and invokes a table command.
fn run_command(
    ctx: &mut ExecutionContext<'_>,
    cmd: &'static CommandDescriptor,
    scope: CommandScope,
    name: &str,
    args: Option<&str>,
) -> bool {
    if let Err(err) = validate(cmd, &tokenize(args)) {
        ctx.report(&err.into_dispatch_error(scope, name));
        return true;
    }

    if scope == CommandScope::Irc {
        if cmd.needs_connection && !ctx.session.is_connected() {
            ctx.report(&DispatchError::NeedsConnection(cmd.name.to_string()));
            return false;
        }
        if ctx.session.buffer.is_dcc_chat() {
            ctx.report(&DispatchError::DccChatBuffer(cmd.name.to_string()));
            return false;
        }
    }

    let keep_colors = cmd.colorize_args && ctx.session.settings.colors_send;
    let encoded = args.map(|a| colors::encode(a, keep_colors));
    let args = encoded.as_deref();

    let result = match cmd.handler {
        Some(Handler::Args(handler)) => handler(ctx, &tokenize(args)),
        Some(Handler::Text(handler)) => handler(ctx, args),
        None => Ok(()),
    };
    if let Err(err) = result {
        if !err.0.is_empty() {
            ctx.error(err.to_string());
        }
        ctx.report(&DispatchError::CommandFailed(name.to_string()));
    }
    true
}

/// Either forwards an unresolved command to the server or reports it.
fn unknown_command(ctx: &mut ExecutionContext<'_>, name: &str, args: Option<&str>) {
    if !ctx.session.settings.send_unknown_commands {
        ctx.report(&DispatchError::UnknownCommand(name.to_string()));
        return;
    }

    let raw = match args {
        Some(args) => format!("{name} {args}"),
        None => name.to_string(),
    };
    info!(command = name, "forwarding unknown command to server");
    ctx.queue(raw);
}
