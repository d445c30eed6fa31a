//! Integration tests for /help, /set and the IRC command handlers.

use pretty_assertions::assert_eq;

use super::common::{Harness, ScriptedHooks};
use irc_input::session::{BufferInfo, PluginCommand, ServerInfo};

#[test]
fn test_help_lists_commands() {
    let mut h = Harness::channel();
    h.input("/help");

    let infos = h.infos();
    assert_eq!(infos.len(), 1);
    assert!(infos[0].starts_with("internal commands:\n"));
    assert!(infos[0].contains("\nIRC commands:\n"));
    assert!(!infos[0].contains("Plugin commands:"));
}

#[test]
fn test_help_lists_plugin_commands() {
    let hooks = ScriptedHooks::default().describe(PluginCommand {
        name: "script".to_string(),
        description: "manage scripts".to_string(),
        arguments: "load|unload name".to_string(),
        arguments_description: String::new(),
    });
    let mut h = Harness::channel().with_hooks(hooks);

    h.input("/help");
    assert!(h.infos()[0].ends_with("Plugin commands:\n   script - manage scripts"));

    h.clear();
    h.input("/help script");
    assert_eq!(h.infos(), vec!["[p]  /script  load|unload name\n\nmanage scripts"]);
}

#[test]
fn test_help_one_command() {
    let mut h = Harness::channel();
    h.input("/help quote");
    assert_eq!(
        h.infos(),
        vec![
            "[i]  /quote  data\n\nsend raw data to server without parsing\n\n\
             data: raw data to send"
        ]
    );
}

#[test]
fn test_help_unknown_command() {
    let mut h = Harness::channel();
    assert!(h.exec("/help frobnicate"));
    assert_eq!(
        h.errors(),
        vec!["No help available, \"frobnicate\" is an unknown command"]
    );
}

#[test]
fn test_set_shows_and_changes_options() {
    let mut h = Harness::channel();

    h.input("/set");
    h.input("/set irc.send_unknown_commands on");
    h.input("/set IRC.SEND_UNKNOWN_COMMANDS");
    assert_eq!(
        h.infos(),
        vec![
            "irc.send_unknown_commands = off",
            "irc.colors_send = on",
            "Option changed: irc.send_unknown_commands = on",
            "irc.send_unknown_commands = on",
        ]
    );
    assert!(h.session.settings.send_unknown_commands);

    h.clear();
    h.input("/whois alice");
    assert_eq!(h.sent(), vec!["whois alice"]);
}

#[test]
fn test_set_rejects_bad_input() {
    let mut h = Harness::channel();
    h.input("/set irc.nope on");
    h.input("/set irc.colors_send maybe");
    assert_eq!(
        h.errors(),
        vec![
            "unknown option \"irc.nope\"",
            "command \"set\" failed",
            "invalid value \"maybe\" for option \"irc.colors_send\" (expected: on or off)",
            "command \"set\" failed",
        ]
    );
    assert!(h.session.settings.colors_send);
}

#[test]
fn test_join_adds_channel_prefix() {
    let mut h = Harness::channel();
    h.input("/join rust");
    assert_eq!(h.sent(), vec!["JOIN #rust"]);
}

#[test]
fn test_part_and_topic_targets() {
    let mut h = Harness::channel();
    h.input("/part");
    h.input("/part #other see you");
    h.input("/topic");
    h.input("/topic #other -delete");
    assert_eq!(
        h.sent(),
        vec!["PART #rust", "PART #other :see you", "TOPIC #rust", "TOPIC #other :"]
    );
}

#[test]
fn test_part_outside_channel_fails() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::private("alice"),
    );
    h.input("/part bye");
    assert!(h.sent().is_empty());
    assert_eq!(
        h.errors(),
        vec![
            "\"part\" command can only be executed in a channel buffer",
            "command \"part\" failed",
        ]
    );
}

#[test]
fn test_away_nick_notice_quit() {
    let mut h = Harness::channel();
    h.input("/away lunch");
    h.input("/away");
    h.input("/nick crab");
    h.input("/notice alice psst");
    h.input("/quit");
    assert_eq!(
        h.sent(),
        vec!["AWAY :lunch", "AWAY", "NICK crab", "NOTICE alice :psst", "QUIT"]
    );
}

#[test]
fn test_me_in_server_buffer_fails() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::server("libera"),
    );
    h.input("/me waves");
    assert!(h.sent().is_empty());
    assert_eq!(h.errors().len(), 2);
}
