//! Colour encoding for outgoing text.
//!
//! The input line uses its own attribute characters (typed with control
//! keys). Before text leaves the client they are converted to mIRC
//! formatting codes, or stripped when colours must not be sent.

/// Input attribute characters.
pub mod input {
    pub const BOLD: char = '\x02';
    pub const COLOR: char = '\x03';
    pub const RESET: char = '\x0F';
    pub const REVERSE: char = '\x12';
    pub const UNDERLINE: char = '\x1F';
}

/// mIRC formatting codes.
pub mod irc {
    pub const BOLD: char = '\x02';
    pub const COLOR: char = '\x03';
    pub const RESET: char = '\x0F';
    pub const REVERSE: char = '\x16';
    pub const UNDERLINE: char = '\x1F';
}

/// Converts input attribute characters to IRC codes, or strips them (and
/// any colour numbers) when `keep_colors` is false.
pub fn encode(text: &str, keep_colors: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let code = match c {
            input::BOLD => irc::BOLD,
            input::RESET => irc::RESET,
            input::REVERSE => irc::REVERSE,
            input::UNDERLINE => irc::UNDERLINE,
            input::COLOR => {
                let spec = take_color_spec(&mut chars);
                if keep_colors {
                    out.push(irc::COLOR);
                    out.push_str(&spec);
                }
                continue;
            }
            _ => {
                out.push(c);
                continue;
            }
        };
        if keep_colors {
            out.push(code);
        }
    }

    out
}

/// Reads `NN[,NN]` after a colour code (one or two digits each).
fn take_color_spec(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut spec = take_digits(chars);
    if !spec.is_empty() && chars.peek() == Some(&',') {
        let mut lookahead = chars.clone();
        lookahead.next();
        if lookahead.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            spec.push(',');
            spec.push_str(&take_digits(chars));
        }
    }
    spec
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while digits.len() < 2 {
        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}
