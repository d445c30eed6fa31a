//! Command resolution across aliases and the two static command tables.
//!
//! Plugin handlers come first but are reached through the execution context,
//! so they are consulted by the dispatcher before [`Registry::resolve`].

use std::rc::Rc;

use crate::commands::alias::{Alias, AliasTable};
use crate::commands::definitions::{
    find_builtin, find_protocol, CommandDescriptor, BUILTIN_COMMANDS, PROTOCOL_COMMANDS,
};

/// Where a command name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    OverrideHook,
    Alias,
    Builtin,
    Protocol,
}

/// Result of looking a command name up in the registry.
#[derive(Debug, Clone)]
pub enum Resolved {
    Alias(Rc<Alias>),
    Builtin(&'static CommandDescriptor),
    Protocol(&'static CommandDescriptor),
}

impl Resolved {
    /// Source that claimed the name.
    pub fn source(&self) -> CommandSource {
        match self {
            Self::Alias(_) => CommandSource::Alias,
            Self::Builtin(_) => CommandSource::Builtin,
            Self::Protocol(_) => CommandSource::Protocol,
        }
    }
}

/// Alias table plus the static command tables.
#[derive(Debug)]
pub struct Registry {
    aliases: AliasTable,
    builtins: &'static [CommandDescriptor],
    protocol: &'static [CommandDescriptor],
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with the standard tables and no aliases.
    pub fn new() -> Self {
        Self {
            aliases: AliasTable::new(),
            builtins: BUILTIN_COMMANDS,
            protocol: PROTOCOL_COMMANDS,
        }
    }

    /// The alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The alias table, mutably.
    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }

    /// Internal command table.
    pub fn builtins(&self) -> &'static [CommandDescriptor] {
        self.builtins
    }

    /// IRC command table, placeholders included.
    pub fn protocol(&self) -> &'static [CommandDescriptor] {
        self.protocol
    }

    /// Resolves a command name: aliases, then internal commands, then IRC
    /// commands that have a handler. Aliases are skipped when `only_builtin`
    /// is set. The first match wins; shadowed names are not reported.
    pub fn resolve(&self, name: &str, only_builtin: bool) -> Option<Resolved> {
        if !only_builtin {
            if let Some(alias) = self.aliases.get(name) {
                return Some(Resolved::Alias(alias));
            }
        }
        if let Some(cmd) = find_builtin(name) {
            return Some(Resolved::Builtin(cmd));
        }
        find_protocol(name).map(Resolved::Protocol)
    }

    /// Sorted, de-duplicated names for completion.
    pub fn command_index(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .builtins
            .iter()
            .chain(self.protocol.iter().filter(|c| c.has_handler()))
            .map(|c| c.name.to_string())
            .chain(self.aliases.iter().map(|a| a.name().to_string()))
            .collect();
        names.sort_by_key(|n| n.to_ascii_lowercase());
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        names
    }
}
