//! IRC commands that build protocol lines.
//!
//! Commands flagged as needing a connection only run once the dispatcher has
//! checked it, so handlers here can rely on a connected server.

use super::{is_channel_name, HandlerResult};
use crate::commands::segmenter;
use crate::commands::tokenizer::ArgVector;
use crate::error::HandlerError;
use crate::session::{BufferKind, ExecutionContext, OutputLine};

/// Handle /away.
pub fn away(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    match args {
        Some(message) => ctx.queue(format!("AWAY :{message}")),
        None => ctx.queue("AWAY"),
    }
    Ok(())
}

/// Handle /join. A missing channel prefix defaults to `#`.
pub fn join(ctx: &mut ExecutionContext<'_>, args: &ArgVector) -> HandlerResult {
    let Some(channel) = args.get(0) else {
        return Err(HandlerError::new("missing arguments for \"join\" command"));
    };
    let channel = if is_channel_name(channel) {
        channel.to_string()
    } else {
        format!("#{channel}")
    };

    match args.get(1) {
        Some(key) => ctx.queue(format!("JOIN {channel} {key}")),
        None => ctx.queue(format!("JOIN {channel}")),
    }
    Ok(())
}

/// Handle /me: CTCP ACTION to the current channel or private buffer.
pub fn me(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let target = match ctx.session.buffer.kind {
        BufferKind::Channel | BufferKind::Private => ctx.session.buffer.name.clone(),
        _ => {
            return Err(HandlerError::new(
                "\"me\" command can only be executed in a channel or private buffer",
            ))
        }
    };
    let nick = own_nick(ctx);
    let text = args.unwrap_or_default();

    if text.is_empty() {
        ctx.queue(format!("PRIVMSG {target} :\x01ACTION\x01"));
    } else {
        ctx.queue(format!("PRIVMSG {target} :\x01ACTION {text}\x01"));
    }
    ctx.session.frontend.print(OutputLine::Action {
        nick,
        text: text.to_string(),
    });
    Ok(())
}

/// Handle /msg. `*` targets the current channel or private buffer.
///
/// Text for the current buffer goes through the message path so it is split
/// and echoed like typed text.
pub fn msg(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let Some((receiver, text)) = args.and_then(|a| a.split_once(' ')) else {
        return Err(HandlerError::new("missing arguments for \"msg\" command"));
    };
    let text = text.trim_start_matches(' ');

    let current = ctx.session.buffer.target().map(str::to_string);
    let receiver = if receiver == "*" {
        current.clone().ok_or_else(|| {
            HandlerError::new("\"msg *\" can only be used in a channel or private buffer")
        })?
    } else {
        receiver.to_string()
    };

    let to_current = current.is_some_and(|c| c.eq_ignore_ascii_case(&receiver))
        && !ctx.session.buffer.is_dcc_chat();
    if to_current {
        segmenter::send_text(ctx, text);
    } else {
        ctx.queue(format!("PRIVMSG {receiver} :{text}"));
        ctx.info(format!("MSG({receiver}): {text}"));
    }
    Ok(())
}

/// Handle /nick.
pub fn nick(ctx: &mut ExecutionContext<'_>, args: &ArgVector) -> HandlerResult {
    let Some(new_nick) = args.get(0) else {
        return Err(HandlerError::new("missing arguments for \"nick\" command"));
    };
    ctx.queue(format!("NICK {new_nick}"));
    Ok(())
}

/// Handle /notice.
pub fn notice(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let Some((nick, text)) = args.and_then(|a| a.split_once(' ')) else {
        return Err(HandlerError::new("missing arguments for \"notice\" command"));
    };
    let text = text.trim_start_matches(' ');
    ctx.queue(format!("NOTICE {nick} :{text}"));
    ctx.info(format!("notice({nick}): {text}"));
    Ok(())
}

/// Handle /part. Without an explicit channel, leaves the current one.
pub fn part(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let (channel, message) = channel_and_rest(ctx, args, "part")?;
    match message {
        Some(message) => ctx.queue(format!("PART {channel} :{message}")),
        None => ctx.queue(format!("PART {channel}")),
    }
    Ok(())
}

/// Handle /quit. Only sends QUIT when connected.
pub fn quit(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    if !ctx.session.is_connected() {
        return Ok(());
    }
    match args {
        Some(message) => ctx.queue(format!("QUIT :{message}")),
        None => ctx.queue("QUIT"),
    }
    Ok(())
}

/// Handle /quote: sends the arguments as a raw line.
pub fn quote(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let Some(raw) = args else {
        return Err(HandlerError::new("missing arguments for \"quote\" command"));
    };
    ctx.queue(raw);
    Ok(())
}

/// Handle /topic. `-delete` clears the topic.
pub fn topic(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let (channel, topic) = channel_and_rest(ctx, args, "topic")?;
    match topic.as_deref() {
        None => ctx.queue(format!("TOPIC {channel}")),
        Some("-delete") => ctx.queue(format!("TOPIC {channel} :")),
        Some(topic) => ctx.queue(format!("TOPIC {channel} :{topic}")),
    }
    Ok(())
}

fn own_nick(ctx: &ExecutionContext<'_>) -> String {
    ctx.session
        .server
        .as_ref()
        .map(|s| s.nick.clone())
        .unwrap_or_default()
}

/// Splits `[channel] [rest]`, falling back to the current channel buffer.
fn channel_and_rest(
    ctx: &ExecutionContext<'_>,
    args: Option<&str>,
    command: &str,
) -> Result<(String, Option<String>), HandlerError> {
    if let Some(args) = args {
        let (first, rest) = match args.split_once(' ') {
            Some((first, rest)) => (first, Some(rest.trim_start_matches(' '))),
            None => (args, None),
        };
        if is_channel_name(first) {
            let rest = rest.filter(|r| !r.is_empty()).map(str::to_string);
            return Ok((first.to_string(), rest));
        }
    }

    if ctx.session.buffer.kind != BufferKind::Channel {
        return Err(HandlerError::new(format!(
            "\"{command}\" command can only be executed in a channel buffer"
        )));
    }
    Ok((
        ctx.session.buffer.name.clone(),
        args.map(str::to_string),
    ))
}
