//! Stdout collaborators for the binary.
//!
//! Protocol lines print as `>> LINE`; buffer output prints as `[info]`,
//! `[error]` or `<nick>` lines. In JSON mode every event is one object.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::session::{Frontend, OutputLine, Transport};

/// Outbound event as printed in JSON mode.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SendEvent<'a> {
    Send { line: &'a str },
    DccChat { peer: &'a str, text: &'a str },
}

/// Renders one buffer line in text mode.
pub fn render_text(line: &OutputLine) -> String {
    let (prefix, text) = match line {
        OutputLine::Info { text } => ("[info] ".to_string(), text),
        OutputLine::Error { text } => ("[error] ".to_string(), text),
        OutputLine::Message { nick, text } => (format!("<{nick}> "), text),
        OutputLine::Action { nick, text } => (format!(" * {nick} "), text),
    };
    text.split('\n')
        .map(|l| format!("{prefix}{l}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!("{{\"type\":\"error\",\"text\":\"{e}\"}}"))
}

/// Transport that prints queued lines.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTransport {
    format: OutputFormat,
}

impl ConsoleTransport {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Transport for ConsoleTransport {
    fn queue_line(&mut self, line: &str) {
        match self.format {
            OutputFormat::Text => println!(">> {line}"),
            OutputFormat::Json => println!("{}", to_json(&SendEvent::Send { line })),
        }
    }

    fn send_dcc_chat(&mut self, peer: &str, text: &str) {
        match self.format {
            OutputFormat::Text => println!(">> [dcc:{peer}] {text}"),
            OutputFormat::Json => println!("{}", to_json(&SendEvent::DccChat { peer, text })),
        }
    }
}

/// Frontend that prints buffer output.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFrontend {
    format: OutputFormat,
}

impl ConsoleFrontend {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Frontend for ConsoleFrontend {
    fn print(&mut self, line: OutputLine) {
        match self.format {
            OutputFormat::Text => println!("{}", render_text(&line)),
            OutputFormat::Json => println!("{}", to_json(&line)),
        }
    }
}
