//! Help text built from the command tables.

use crate::commands::definitions::CommandDescriptor;
use crate::commands::registry::Registry;
use crate::session::PluginCommand;

/// Lists every executable command, grouped by origin.
pub fn command_list(registry: &Registry, plugins: &[PluginCommand]) -> String {
    let mut out = String::from("internal commands:\n");
    for cmd in registry.builtins() {
        out.push_str(&format!("   {} - {}\n", cmd.name, cmd.description));
    }

    out.push_str("IRC commands:\n");
    for cmd in registry.protocol().iter().filter(|c| c.has_handler()) {
        out.push_str(&format!("   {} - {}\n", cmd.name, cmd.description));
    }

    if !plugins.is_empty() {
        out.push_str("Plugin commands:\n");
        for cmd in plugins {
            out.push_str(&format!("   {} - {}\n", cmd.name, cmd.description));
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Detailed help for one command, or `None` if the name is unknown.
///
/// Plugin commands are searched first, then internal and IRC commands.
pub fn command_help(registry: &Registry, plugins: &[PluginCommand], name: &str) -> Option<String> {
    if let Some(cmd) = plugins.iter().find(|c| c.name.eq_ignore_ascii_case(name)) {
        return Some(render(
            "p",
            &cmd.name,
            &cmd.arguments,
            &cmd.description,
            &cmd.arguments_description,
        ));
    }

    let (tag, cmd): (&str, &CommandDescriptor) = registry
        .builtins()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| ("w", c))
        .or_else(|| {
            registry
                .protocol()
                .iter()
                .find(|c| c.has_handler() && c.name.eq_ignore_ascii_case(name))
                .map(|c| ("i", c))
        })?;

    Some(render(
        tag,
        cmd.name,
        cmd.arguments,
        cmd.description,
        cmd.arguments_description,
    ))
}

fn render(tag: &str, name: &str, arguments: &str, description: &str, details: &str) -> String {
    let mut out = format!("[{tag}]  /{name}  {arguments}").trim_end().to_string();
    if !description.is_empty() {
        out.push_str("\n\n");
        out.push_str(description);
    }
    if !details.is_empty() {
        out.push_str("\n\n");
        out.push_str(details);
    }
    out
}
