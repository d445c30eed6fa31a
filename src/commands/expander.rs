//! Alias expansion.
//!
//! An alias runs each of its sub-commands through [`exec_command`] in turn.
//! The running flag stops an alias from expanding itself, directly or
//! through other aliases; distinct aliases may still chain, so nesting is
//! bounded by the number of aliases defined.

use std::rc::Rc;

use tracing::debug;

use crate::commands::alias::{replace_args, replace_vars, split_commands, Alias, RunningGuard};
use crate::commands::dispatcher::{context_vars, exec_command, with_slash};
use crate::error::DispatchError;
use crate::session::ExecutionContext;

/// Expands `alias` with the caller's arguments and runs every sub-command.
///
/// Always claims the command: failures of individual sub-commands are
/// reported by their own dispatch.
pub fn expand_and_run(
    ctx: &mut ExecutionContext<'_>,
    alias: &Rc<Alias>,
    raw_args: Option<&str>,
) -> bool {
    let Some(_running) = RunningGuard::enter(alias) else {
        ctx.report(&DispatchError::CircularAlias(alias.name().to_string()));
        return true;
    };

    // Captured once: the table may change while sub-commands run.
    let commands = split_commands(alias.command());
    debug!(alias = alias.name(), commands = commands.len(), "expanding alias");

    let last = commands.len().saturating_sub(1);
    let mut any_substitution = false;

    for (index, command) in commands.iter().enumerate() {
        let command = replace_vars(command, &context_vars(ctx.session));

        let line = match replace_args(&command, raw_args) {
            Some(substituted) => {
                any_substitution = true;
                with_slash(&substituted)
            }
            None => match raw_args {
                Some(args) if index == last && !any_substitution => {
                    with_slash(&format!("{command} {args}"))
                }
                _ => with_slash(&command),
            },
        };

        exec_command(ctx, &line);
    }

    true
}
