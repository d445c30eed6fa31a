//! Internal commands: /alias, /builtin, /help, /set, /unalias.

use tracing::debug;

use super::HandlerResult;
use crate::commands::definitions::{find_builtin, find_protocol};
use crate::commands::dispatcher::{user_input, with_slash};
use crate::commands::help;
use crate::commands::tokenizer::ArgVector;
use crate::error::HandlerError;
use crate::session::{ExecutionContext, InputSettings};

/// Handle /alias: list, show or create aliases.
pub fn alias(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let Some(args) = args else {
        list_aliases(ctx);
        return Ok(());
    };

    let args = args.trim_start_matches('/');
    let Some((name, command)) = args.split_once(' ') else {
        show_alias(ctx, args);
        return Ok(());
    };

    let command = command.trim_start_matches(' ');
    if command.is_empty() {
        return Err(HandlerError::new("missing arguments for \"alias\" command"));
    }

    if find_builtin(name).is_some() || find_protocol(name).is_some() {
        debug!(alias = name, "alias shadows a table command");
    }
    ctx.session.registry.aliases_mut().insert(name, command);
    ctx.info(format!("Alias \"{name}\" => \"{command}\" created"));
    Ok(())
}

fn list_aliases(ctx: &mut ExecutionContext<'_>) {
    let lines: Vec<String> = ctx
        .session
        .registry
        .aliases()
        .iter()
        .map(|a| format!("  {} => {}", a.name(), a.command()))
        .collect();

    if lines.is_empty() {
        ctx.info("No alias defined.");
        return;
    }
    ctx.info("List of aliases:");
    for line in lines {
        ctx.info(line);
    }
}

fn show_alias(ctx: &mut ExecutionContext<'_>, name: &str) {
    match ctx.session.registry.aliases().get(name) {
        Some(alias) => {
            ctx.info("Alias:");
            ctx.info(format!("  {} => {}", alias.name(), alias.command()));
        }
        None => ctx.info("No alias found."),
    }
}

/// Handle /unalias.
pub fn unalias(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    let name = args.unwrap_or_default();
    let name = name.strip_prefix('/').unwrap_or(name);

    match ctx.session.registry.aliases_mut().remove(name) {
        Some(removed) => {
            ctx.info(format!("Alias \"{}\" removed", removed.name()));
            Ok(())
        }
        None => Err(HandlerError::new(format!("alias \"{name}\" not found"))),
    }
}

/// Handle /builtin: runs a line with plugin handlers and aliases bypassed.
pub fn builtin(ctx: &mut ExecutionContext<'_>, args: Option<&str>) -> HandlerResult {
    if let Some(args) = args {
        let line = with_slash(args);
        user_input(&mut ctx.builtin_only(), &line);
    }
    Ok(())
}

/// Handle /help.
pub fn help(ctx: &mut ExecutionContext<'_>, args: &ArgVector) -> HandlerResult {
    let plugins = ctx.session.hooks.commands();

    match args.get(0) {
        None => {
            let text = help::command_list(&ctx.session.registry, &plugins);
            ctx.info(text);
        }
        Some(name) => match help::command_help(&ctx.session.registry, &plugins, name) {
            Some(text) => ctx.info(text),
            None => ctx.error(format!(
                "No help available, \"{name}\" is an unknown command"
            )),
        },
    }
    Ok(())
}

const SEND_UNKNOWN_COMMANDS: &str = "irc.send_unknown_commands";
const COLORS_SEND: &str = "irc.colors_send";

/// Handle /set: display or change input options.
pub fn set(ctx: &mut ExecutionContext<'_>, args: &ArgVector) -> HandlerResult {
    let settings = ctx.session.settings;

    match (args.get(0), args.get(1)) {
        (None, _) => {
            for option in [SEND_UNKNOWN_COMMANDS, COLORS_SEND] {
                let value = option_value(&settings, option).unwrap_or_default();
                ctx.info(format!("{option} = {}", on_off(value)));
            }
            Ok(())
        }
        (Some(option), None) => {
            let value = option_value(&settings, option)
                .ok_or_else(|| HandlerError::new(format!("unknown option \"{option}\"")))?;
            ctx.info(format!("{} = {}", option.to_ascii_lowercase(), on_off(value)));
            Ok(())
        }
        (Some(option), Some(value)) => {
            let value = parse_switch(value).ok_or_else(|| {
                HandlerError::new(format!(
                    "invalid value \"{value}\" for option \"{option}\" (expected: on or off)"
                ))
            })?;
            let slot = option_slot(&mut ctx.session.settings, option)
                .ok_or_else(|| HandlerError::new(format!("unknown option \"{option}\"")))?;
            *slot = value;
            debug!(option, value, "option changed");
            ctx.info(format!(
                "Option changed: {} = {}",
                option.to_ascii_lowercase(),
                on_off(value)
            ));
            Ok(())
        }
    }
}

fn option_value(settings: &InputSettings, option: &str) -> Option<bool> {
    let mut copy = *settings;
    option_slot(&mut copy, option).map(|slot| *slot)
}

fn option_slot<'a>(settings: &'a mut InputSettings, option: &str) -> Option<&'a mut bool> {
    if option.eq_ignore_ascii_case(SEND_UNKNOWN_COMMANDS) {
        Some(&mut settings.send_unknown_commands)
    } else if option.eq_ignore_ascii_case(COLORS_SEND) {
        Some(&mut settings.colors_send)
    } else {
        None
    }
}

/// Parses an on/off switch value.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
