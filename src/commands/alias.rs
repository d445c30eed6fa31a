//! User-defined aliases.
//!
//! An alias maps a name to a template of one or more `;`-separated commands.
//! Templates may reference the caller's arguments (`$1`..`$9`, `$*`) and the
//! current context (`$nick`, `$channel`, `$server`).

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A named alias.
#[derive(Debug)]
pub struct Alias {
    name: String,
    command: String,
    running: Cell<bool>,
}

impl Alias {
    fn new(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            running: Cell::new(false),
        }
    }

    /// Alias name as it was defined.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expansion template.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns true while this alias's own expansion is on the call stack.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Marks an alias as running until dropped.
#[derive(Debug)]
pub struct RunningGuard {
    alias: Rc<Alias>,
}

impl RunningGuard {
    /// Marks `alias` as running, or returns `None` if it already is.
    pub fn enter(alias: &Rc<Alias>) -> Option<Self> {
        if alias.running.replace(true) {
            return None;
        }
        Some(Self {
            alias: Rc::clone(alias),
        })
    }
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.alias.running.set(false);
    }
}

/// Alias table keyed by lowercased name.
///
/// Entries are shared so an expansion in progress keeps its alias alive even
/// if a sub-command removes or redefines it.
#[derive(Debug, Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, Rc<Alias>>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines or redefines an alias and returns it.
    pub fn insert(&mut self, name: &str, command: &str) -> Rc<Alias> {
        let alias = Rc::new(Alias::new(name, command));
        self.aliases.insert(key(name), Rc::clone(&alias));
        alias
    }

    /// Looks up an alias, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<Rc<Alias>> {
        self.aliases.get(&key(name)).cloned()
    }

    /// Removes an alias, ignoring ASCII case.
    pub fn remove(&mut self, name: &str) -> Option<Rc<Alias>> {
        self.aliases.remove(&key(name))
    }

    /// Aliases sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.values().map(|a| a.as_ref())
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true when no alias is defined.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Splits a template into sub-commands on unescaped `;`.
///
/// `\;` yields a literal semicolon. Leading spaces of each sub-command are
/// stripped and empty sub-commands are dropped.
pub fn split_commands(template: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&';') => {
                chars.next();
                current.push(';');
            }
            ';' => push_command(&mut commands, &mut current),
            _ => current.push(c),
        }
    }
    push_command(&mut commands, &mut current);

    commands
}

fn push_command(commands: &mut Vec<String>, current: &mut String) {
    let command = current.trim_start_matches(' ');
    if !command.is_empty() {
        commands.push(command.to_string());
    }
    current.clear();
}

/// Context values substituted for `$nick`, `$channel` and `$server`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextVars<'a> {
    pub nick: Option<&'a str>,
    pub channel: Option<&'a str>,
    pub server: Option<&'a str>,
}

/// Substitutes context variables. Variables without a value stay verbatim.
pub fn replace_vars(text: &str, vars: &ContextVars<'_>) -> String {
    let mut result = text.to_string();
    for (token, value) in [
        ("$nick", vars.nick),
        ("$channel", vars.channel),
        ("$server", vars.server),
    ] {
        if let Some(value) = value {
            if result.contains(token) {
                result = result.replace(token, value);
            }
        }
    }
    result
}

/// Substitutes positional tokens with the caller's arguments.
///
/// `$1`..`$9` take the n-th whitespace-separated argument (empty if absent),
/// `$*` takes the whole argument string, and `\$` is a literal `$`. Returns
/// `None` when the text contains no such token.
pub fn replace_args(text: &str, raw_args: Option<&str>) -> Option<String> {
    let args: Vec<&str> = raw_args
        .map(|s| s.split_whitespace().collect())
        .unwrap_or_default();
    let mut result = String::with_capacity(text.len());
    let mut replaced = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('\\', Some('$')) => {
                chars.next();
                result.push('$');
                replaced += 1;
            }
            ('$', Some('*')) => {
                chars.next();
                result.push_str(raw_args.unwrap_or(""));
                replaced += 1;
            }
            ('$', Some(digit @ '1'..='9')) => {
                chars.next();
                let index = digit as usize - '1' as usize;
                result.push_str(args.get(index).copied().unwrap_or(""));
                replaced += 1;
            }
            _ => result.push(c),
        }
    }

    (replaced > 0).then_some(result)
}
