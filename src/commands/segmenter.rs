//! Message path: sends chat text to the current buffer's target.
//!
//! Text longer than one protocol line allows is split into fragments, each
//! sent as its own `PRIVMSG` and echoed locally. Fragments end on a code
//! point boundary, preferably right after the last whitespace that fits.

use tracing::debug;

use crate::colors;
use crate::commands::classifier::unescape_message;
use crate::error::DispatchError;
use crate::session::{BufferKind, ExecutionContext, OutputLine};

/// Hard cap on one protocol line, framing included.
pub const LINE_CAP: usize = 512;

/// Approximate framing overhead around the payload of a `PRIVMSG`.
pub const FRAMING_OVERHEAD: usize = 16 + 65 + 10;

/// Payload budget for one line sent by `nick` to `target`.
///
/// May be zero or negative for absurdly long names, in which case the text
/// is sent unsplit.
pub fn max_payload_len(nick: &str, target: &str) -> i64 {
    LINE_CAP as i64 - FRAMING_OVERHEAD as i64 - nick.len() as i64 - target.len() as i64
}

/// Byte length of the first fragment of `text` for a budget of `max_len`.
///
/// Returns `text.len()` when the text fits. Otherwise scans whole code
/// points up to the budget; the fragment ends right after the last
/// whitespace seen before the cutoff, or at the last code point boundary that
/// fits. A fragment always holds at least one code point.
pub fn split_point(text: &str, max_len: usize) -> usize {
    if text.len() <= max_len {
        return text.len();
    }

    let mut pos = 0;
    let mut last_space: Option<(usize, usize)> = None;
    for (idx, c) in text.char_indices() {
        let next = idx + c.len_utf8();
        if c.is_whitespace() {
            last_space = Some((idx, next));
        }
        if next > max_len {
            break;
        }
        pos = next;
    }

    let split = match last_space {
        Some((start, end)) if start < pos => end,
        _ => pos,
    };
    if split == 0 {
        text.chars().next().map(char::len_utf8).unwrap_or(0)
    } else {
        split
    }
}

/// Splits `text` into the fragments [`send_text`] would send.
pub fn fragments(text: &str, max_len: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (head, tail) = rest.split_at(split_point(rest, max_len));
        parts.push(head);
        rest = tail;
    }
    parts
}

/// Sends `text` to the buffer target as one or more `PRIVMSG` lines, echoing
/// each fragment locally with our own nick.
pub fn send_text(ctx: &mut ExecutionContext<'_>, text: &str) {
    if text.is_empty() {
        return;
    }

    let connected_nick = ctx
        .session
        .server
        .as_ref()
        .filter(|server| server.connected)
        .map(|server| server.nick.clone());
    let Some(nick) = connected_nick else {
        ctx.report(&DispatchError::NotConnected);
        return;
    };
    let target = ctx.session.buffer.name.clone();

    let budget = max_payload_len(&nick, &target);
    let max_len = usize::try_from(budget)
        .ok()
        .filter(|&len| len > 0)
        .unwrap_or(usize::MAX);
    let parts = fragments(text, max_len);
    if parts.len() > 1 {
        debug!(budget, fragments = parts.len(), "splitting message");
    }

    for part in parts {
        ctx.queue(format!("PRIVMSG {} :{}", target, part));
        ctx.session.frontend.print(OutputLine::Message {
            nick: nick.clone(),
            text: part.to_string(),
        });
    }
}

/// Handles one line classified as chat text.
pub fn send_message(ctx: &mut ExecutionContext<'_>, line: &str) {
    let text = unescape_message(line);
    let own_nick = if ctx.session.buffer.is_server() {
        None
    } else {
        ctx.session.server.as_ref().map(|server| server.nick.clone())
    };
    let Some(nick) = own_nick else {
        ctx.report(&DispatchError::NotAChannel);
        return;
    };

    let text = colors::encode(text, ctx.session.settings.colors_send);
    let kind = ctx.session.buffer.kind;
    match kind {
        BufferKind::DccChat { open: false } => ctx.report(&DispatchError::DccChatClosed),
        BufferKind::DccChat { open: true } => {
            let peer = ctx.session.buffer.name.clone();
            ctx.session.transport.send_dcc_chat(&peer, &text);
            ctx.session.frontend.print(OutputLine::Message { nick, text });
        }
        BufferKind::Channel | BufferKind::Private | BufferKind::Server => send_text(ctx, &text),
    }
}
