//! Integration tests for alias management and expansion.

use pretty_assertions::assert_eq;

use super::common::Harness;
use irc_input::session::{BufferInfo, ServerInfo};

#[test]
fn test_alias_without_args_appends_nothing() {
    let mut h = Harness::channel();
    h.alias("gn", "quit Good night;");

    assert!(h.exec("/gn"));
    assert_eq!(h.sent(), vec!["QUIT :Good night"]);
}

#[test]
fn test_positional_arg_substitution() {
    let mut h = Harness::channel().forwarding_unknown();
    h.alias("echo1", "say $1");

    h.input("/echo1 hello world");
    assert_eq!(h.sent(), vec!["say hello"]);
}

#[test]
fn test_all_args_substitution() {
    let mut h = Harness::channel();
    h.alias("shout", "msg * $*!");

    h.input("/shout hello   world");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :hello   world!"]);
}

#[test]
fn test_missing_positional_is_empty() {
    let mut h = Harness::channel();
    h.alias("t", "topic [$1][$2]");

    h.input("/t one");
    assert_eq!(h.sent(), vec!["TOPIC #rust :[one][]"]);
}

#[test]
fn test_args_appended_to_last_command_only() {
    let mut h = Harness::channel();
    h.alias("jt", "join #a;topic #a");

    h.input("/jt new topic");
    assert_eq!(h.sent(), vec!["JOIN #a", "TOPIC #a :new topic"]);
}

#[test]
fn test_no_append_after_substitution() {
    let mut h = Harness::channel();
    h.alias("greet", "join $1;part");

    h.input("/greet #a");
    assert_eq!(h.sent(), vec!["JOIN #a", "PART #rust"]);
}

#[test]
fn test_context_vars_in_template() {
    let mut h = Harness::channel();
    h.alias("whoami", "quote PRIVMSG $channel :I am $nick on $server");

    h.input("/whoami");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :I am ferris on libera"]);
}

#[test]
fn test_context_var_without_value_stays_verbatim() {
    let mut h = Harness::new(
        Some(ServerInfo::new("libera", "ferris")),
        BufferInfo::server("libera"),
    );
    h.alias("c", "quote NOTE $channel");

    h.input("/c");
    assert_eq!(h.sent(), vec!["NOTE $channel"]);
}

#[test]
fn test_escaped_semicolon_and_dollar() {
    let mut h = Harness::channel();
    h.alias("raw", "quote PRIVMSG #rust :a\\;b costs \\$5");

    h.input("/raw ignored");
    assert_eq!(h.sent(), vec!["PRIVMSG #rust :a;b costs $5"]);
}

#[test]
fn test_circular_alias_reported_once() {
    let mut h = Harness::channel();
    h.alias("a", "/b");
    h.alias("b", "/a");

    assert!(h.exec("/a"));
    assert_eq!(
        h.errors(),
        vec!["circular reference when calling alias \"/a\""]
    );
    assert!(h.sent().is_empty());
    assert!(!h.session.registry.aliases().get("a").unwrap().is_running());
    assert!(!h.session.registry.aliases().get("b").unwrap().is_running());
}

#[test]
fn test_self_reference_reported() {
    let mut h = Harness::channel();
    h.alias("loop", "join #a;loop");

    h.input("/loop");
    assert_eq!(h.sent(), vec!["JOIN #a"]);
    assert_eq!(
        h.errors(),
        vec!["circular reference when calling alias \"/loop\""]
    );
}

#[test]
fn test_alias_can_run_again_after_expansion() {
    let mut h = Harness::channel();
    h.alias("j", "join");

    h.input("/j #a");
    h.input("/j #b");
    assert_eq!(h.sent(), vec!["JOIN #a", "JOIN #b"]);
}

#[test]
fn test_distinct_aliases_chain() {
    let mut h = Harness::channel();
    h.alias("a", "b");
    h.alias("b", "c");
    h.alias("c", "join");

    h.input("/a #deep");
    assert_eq!(h.sent(), vec!["JOIN #deep"]);
    assert!(h.errors().is_empty());
}

#[test]
fn test_unalias_during_expansion_keeps_captured_list() {
    let mut h = Harness::channel();
    h.alias("once", "unalias once;join #a;join #b");

    h.input("/once");
    assert_eq!(h.sent(), vec!["JOIN #a", "JOIN #b"]);
    assert!(h.session.registry.aliases().get("once").is_none());
}

#[test]
fn test_alias_shadows_builtin() {
    let mut h = Harness::channel();
    h.alias("help", "quote HELP");

    h.input("/help");
    assert_eq!(h.sent(), vec!["HELP"]);
}

#[test]
fn test_subcommand_failure_does_not_stop_alias() {
    let mut h = Harness::channel();
    h.alias("mixed", "frobnicate;join #a");

    assert!(h.exec("/mixed"));
    assert_eq!(h.sent(), vec!["JOIN #a"]);
    assert_eq!(h.errors().len(), 1);
}

#[test]
fn test_alias_command_creates_and_lists() {
    let mut h = Harness::channel();

    h.input("/alias");
    h.input("/alias /gn quit Good night");
    h.input("/alias");
    h.input("/alias gn");
    h.input("/alias nope");

    assert_eq!(
        h.infos(),
        vec![
            "No alias defined.",
            "Alias \"gn\" => \"quit Good night\" created",
            "List of aliases:",
            "  gn => quit Good night",
            "Alias:",
            "  gn => quit Good night",
            "No alias found.",
        ]
    );

    h.clear();
    h.input("/GN");
    assert_eq!(h.sent(), vec!["QUIT :Good night"]);
}

#[test]
fn test_alias_name_with_trailing_spaces_shows() {
    let mut h = Harness::channel();
    h.input("/alias gn   ");
    assert_eq!(h.infos(), vec!["No alias found."]);
    assert!(h.session.registry.aliases().is_empty());
}

#[test]
fn test_unalias_command() {
    let mut h = Harness::channel();
    h.alias("gn", "quit");

    h.input("/unalias /GN");
    assert_eq!(h.infos(), vec!["Alias \"gn\" removed"]);
    assert!(h.session.registry.aliases().is_empty());
}
