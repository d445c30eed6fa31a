//! Integration tests for the irc-input binary.

use std::io::Write;

use super::common::{run_binary, run_binary_with_config};

#[test]
fn test_exec_lines_in_channel() {
    let (code, stdout, _) = run_binary(&[
        "--server",
        "libera",
        "--nick",
        "ferris",
        "--channel",
        "#rust",
        "--exec",
        "/join #a",
        "--exec",
        "hello",
    ]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        ">> JOIN #a\n>> PRIVMSG #rust :hello\n<ferris> hello\n"
    );
}

#[test]
fn test_unknown_command_text_output() {
    let (code, stdout, _) = run_binary(&["--exec", "/frobnicate"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("[error] unknown command \"frobnicate\""));
}

#[test]
fn test_send_unknown_flag() {
    let (code, stdout, _) = run_binary(&["--send-unknown", "--exec", "/whois alice"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, ">> whois alice\n");
}

#[test]
fn test_disconnected_flag() {
    let (code, stdout, _) = run_binary(&["--disconnected", "--exec", "/join #a"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "[error] command \"join\" needs a server connection!\n");
}

#[test]
fn test_json_output() {
    let (code, stdout, _) = run_binary(&[
        "--channel",
        "#rust",
        "--format",
        "json",
        "--exec",
        "hi",
    ]);

    assert_eq!(code, 0);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "send");
    assert_eq!(lines[0]["line"], "PRIVMSG #rust :hi");
    assert_eq!(lines[1]["type"], "message");
    assert_eq!(lines[1]["nick"], "guest");
}

#[test]
fn test_aliases_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[identity]\nserver = \"libera\"\nnick = \"ferris\"\n\n[aliases]\ngn = \"quit Good night;\""
    )
    .unwrap();

    let (code, stdout, _) = run_binary_with_config(file.path(), &["--exec", "/gn"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, ">> QUIT :Good night\n");
}

#[test]
fn test_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[irc]\ncolors_send = \"yes\"").unwrap();

    let (code, _, stderr) = run_binary_with_config(file.path(), &["--exec", "/help"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Configuration Error"));
}

#[test]
fn test_invalid_format_fails() {
    let (code, _, stderr) = run_binary(&["--format", "xml", "--exec", "/help"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid output format"));
}
