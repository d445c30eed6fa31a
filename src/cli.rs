//! Command-line argument parsing for irc-input.

use crate::config::IdentityConfig;
use clap::Parser;
use std::path::PathBuf;

/// Output format for events printed by the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `>> LINE` for protocol lines, `[info]`/`[error]`/`<nick>` for buffer output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Runs IRC client input lines through the command pipeline and prints what
/// would be sent to the server.
#[derive(Parser, Debug)]
#[command(name = "irc-input")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server name
    #[arg(long, value_name = "NAME", env = "IRC_SERVER")]
    pub server: Option<String>,

    /// Our nick on the server
    #[arg(long, value_name = "NICK", env = "IRC_NICK")]
    pub nick: Option<String>,

    /// Channel (or nick, for a private buffer) the input is typed in
    #[arg(long, value_name = "NAME")]
    pub channel: Option<String>,

    /// Treat the server as not connected
    #[arg(long)]
    pub disconnected: bool,

    /// Forward unknown commands to the server
    #[arg(long)]
    pub send_unknown: bool,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Input line to run (repeatable); stdin is read when none are given
    #[arg(long = "exec", value_name = "LINE")]
    pub exec: Vec<String>,

    /// Write logs to a file instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Identity overrides given on the command line.
    pub fn identity(&self) -> IdentityConfig {
        IdentityConfig {
            server: self.server.clone(),
            nick: self.nick.clone(),
            channel: self.channel.clone(),
            connected: !self.disconnected,
        }
    }

    /// Parses the output format from the --format argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.format.parse()
    }
}
