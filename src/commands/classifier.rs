//! Decides whether a line of input is a command or chat text.

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A `/command [args]` line.
    Command,
    /// Chat text for the current buffer.
    Message,
}

/// Classifies one line of input.
///
/// A line is a command when it starts with `/`, does not start with `/*`,
/// and has no further `/` before its first space. This keeps `/usr/bin/foo`
/// as text while accepting `/join /some/arg`.
pub fn classify(line: &str) -> LineKind {
    if !line.starts_with('/') || line.starts_with("/*") {
        return LineKind::Message;
    }

    let rest = &line[1..];
    match (rest.find('/'), rest.find(' ')) {
        (None, _) => LineKind::Command,
        (Some(slash), Some(space)) if slash > space => LineKind::Command,
        _ => LineKind::Message,
    }
}

/// Removes the `//` escape from chat text: `//foo` is sent as `/foo`.
pub fn unescape_message(line: &str) -> &str {
    if line.starts_with("//") {
        &line[1..]
    } else {
        line
    }
}
