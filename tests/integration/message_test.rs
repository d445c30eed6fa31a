//! Integration tests for the message path and the outbound segmenter.

use pretty_assertions::assert_eq;

use super::common::Harness;
use irc_input::commands::segmenter::{fragments, max_payload_len};
use irc_input::session::{BufferInfo, OutputLine, ServerInfo};

/// Splits each chunk right after its last space within `max` bytes. A space
/// sitting exactly at `max` ends the chunk there instead.
fn split_at_spaces(text: &str, max: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = text;
    while rest.len() > max {
        let cut = if rest.as_bytes()[max] == b' ' {
            max
        } else {
            rest[..max].rfind(' ').map(|i| i + 1).unwrap_or(max)
        };
        parts.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
    if !rest.is_empty() {
        parts.push(rest.to_string());
    }
    parts
}

fn words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{}", "x".repeat(i % 9)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_long_ascii_matches_space_split() {
    let text = words(120);
    let text = &text[..600];
    assert_eq!(text.len(), 600);

    let parts = fragments(text, 100);
    assert_eq!(parts, split_at_spaces(text, 100));
    assert!(parts.iter().all(|p| p.len() <= 100));
}

#[test]
fn test_short_message_sent_and_echoed() {
    let mut h = Harness::channel();
    h.input("hello there");

    assert_eq!(h.sent(), vec!["PRIVMSG #rust :hello there"]);
    assert_eq!(
        h.output(),
        vec![OutputLine::Message {
            nick: "ferris".to_string(),
            text: "hello there".to_string(),
        }]
    );
}

#[test]
fn test_long_message_split_into_lines() {
    let mut h = Harness::channel();
    let budget = max_payload_len("ferris", "#rust") as usize;
    let text = words(200);
    assert!(text.len() > budget * 2);

    h.input(&text);

    let sent = h.sent();
    assert!(sent.len() >= 3);
    let payloads: Vec<&str> = sent
        .iter()
        .map(|line| line.strip_prefix("PRIVMSG #rust :").unwrap())
        .collect();
    assert!(payloads.iter().all(|p| p.len() <= budget));
    assert_eq!(payloads.concat(), text);

    let echoed: Vec<String> = h
        .output()
        .into_iter()
        .map(|line| match line {
            OutputLine::Message { text, .. } => text,
            other => panic!("unexpected output {other:?}"),
        })
        .collect();
    assert_eq!(echoed.concat(), text);
}

#[test]
fn test_large_paste_with_tiny_budget() {
    let target = format!("#{}", "a".repeat(409));
    let budget = max_payload_len("ferris", &target) as usize;
    assert_eq!(budget, 5);

    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::channel(target.as_str()),
    );
    let text = "x".repeat(200_000);
    h.input(&text);

    let prefix = format!("PRIVMSG {target} :");
    let sent = h.sent();
    assert_eq!(sent.len(), 40_000);
    let payloads: Vec<&str> = sent
        .iter()
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap())
        .collect();
    assert!(payloads.iter().all(|p| p.len() == budget));
    assert_eq!(payloads.concat(), text);
}

#[test]
fn test_multibyte_message_never_split_inside_code_point() {
    let mut h = Harness::channel();
    let text = "日本語".repeat(200);

    h.input(&text);

    let sent = h.sent();
    assert!(sent.len() > 1);
    let payloads: Vec<&str> = sent
        .iter()
        .map(|line| line.strip_prefix("PRIVMSG #rust :").unwrap())
        .collect();
    assert_eq!(payloads.concat(), text);
}

#[test]
fn test_double_slash_is_unescaped() {
    let mut h = Harness::channel();
    h.input("//help is not a command");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :/help is not a command"]);
}

#[test]
fn test_reserved_prefix_is_text() {
    let mut h = Harness::channel();
    h.input("/*wink*");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :/*wink*"]);
}

#[test]
fn test_message_in_server_buffer_refused() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::server("libera"),
    );
    h.input("hello");
    assert!(h.sent().is_empty());
    assert_eq!(h.errors(), vec!["This window is not a channel!"]);
}

#[test]
fn test_message_when_disconnected() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris").disconnected()),
        BufferInfo::private("alice"),
    );
    h.input("hello");
    assert!(h.sent().is_empty());
    assert_eq!(h.errors(), vec!["you are not connected to server"]);
}

#[test]
fn test_dcc_chat_message() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::dcc_chat("bob", true),
    );
    h.input("psst");
    assert!(h.sent().is_empty());
    assert_eq!(h.dcc(), vec![("bob".to_string(), "psst".to_string())]);

    let mut closed = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::dcc_chat("bob", false),
    );
    closed.input("psst");
    assert!(closed.dcc().is_empty());
    assert_eq!(closed.errors(), vec!["DCC CHAT is closed"]);
}

#[test]
fn test_colors_stripped_when_disabled() {
    let mut h = Harness::channel();
    h.input("/set irc.colors_send off");
    h.clear();

    h.input("\x02bold\x02 \x0304red");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :bold red"]);
}

#[test]
fn test_me_sends_action() {
    let mut h = Harness::channel();
    h.input("/me waves");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :\x01ACTION waves\x01"]);
    assert_eq!(
        h.output(),
        vec![OutputLine::Action {
            nick: "ferris".to_string(),
            text: "waves".to_string(),
        }]
    );
}

#[test]
fn test_msg_to_other_target() {
    let mut h = Harness::channel();
    h.input("/msg alice hi there");
    assert_eq!(h.sent(), vec!["PRIVMSG alice :hi there"]);
    assert_eq!(h.infos(), vec!["MSG(alice): hi there"]);
}
