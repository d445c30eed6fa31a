//! Configuration management for irc-input.
//!
//! Loads the `[irc]` input options, the simulated session identity and the
//! initial alias table from a TOML file.

use crate::commands::handlers::is_channel_name;
use crate::commands::registry::Registry;
use crate::error::{ClientError, Result};
use crate::session::{BufferInfo, InputSettings, ServerInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Input options.
    #[serde(default)]
    pub irc: IrcConfig,

    /// Session the binary runs against.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Aliases loaded at start, name to expansion template.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// `[irc]` options consumed by the input pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrcConfig {
    /// Forward unknown commands to the server as raw lines.
    #[serde(default)]
    pub send_unknown_commands: bool,

    /// Keep colour codes in outgoing text.
    #[serde(default = "default_true")]
    pub colors_send: bool,
}

fn default_true() -> bool {
    true
}

impl Default for IrcConfig {
    fn default() -> Self {
        Self {
            send_unknown_commands: false,
            colors_send: true,
        }
    }
}

impl From<IrcConfig> for InputSettings {
    fn from(irc: IrcConfig) -> Self {
        Self {
            send_unknown_commands: irc.send_unknown_commands,
            colors_send: irc.colors_send,
        }
    }
}

/// `[identity]`: server, nick and buffer for the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Server name.
    pub server: Option<String>,

    /// Our nick.
    pub nick: Option<String>,

    /// Channel the input is typed in; the server buffer when unset.
    pub channel: Option<String>,

    /// Whether the server counts as connected.
    #[serde(default = "default_true")]
    pub connected: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            server: None,
            nick: None,
            channel: None,
            connected: true,
        }
    }
}

fn default_server() -> String {
    "local".to_string()
}

fn default_nick() -> String {
    "guest".to_string()
}

impl IdentityConfig {
    /// Overrides fields with any values given on the command line.
    pub fn merge(&mut self, other: &IdentityConfig) {
        if other.server.is_some() {
            self.server = other.server.clone();
        }
        if other.nick.is_some() {
            self.nick = other.nick.clone();
        }
        if other.channel.is_some() {
            self.channel = other.channel.clone();
        }
        if !other.connected {
            self.connected = false;
        }
    }

    /// Server described by this identity.
    pub fn server_info(&self) -> ServerInfo {
        let server = ServerInfo::new(
            self.server.clone().unwrap_or_else(default_server),
            self.nick.clone().unwrap_or_else(default_nick),
        );
        if self.connected {
            server
        } else {
            server.disconnected()
        }
    }

    /// Buffer the input is typed in.
    pub fn buffer_info(&self) -> BufferInfo {
        match &self.channel {
            Some(channel) if is_channel_name(channel) => {
                BufferInfo::channel(channel)
            }
            Some(nick) => BufferInfo::private(nick),
            None => BufferInfo::server(self.server.clone().unwrap_or_else(default_server)),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("irc-input")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ClientError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Loads the configured aliases into `registry`.
    pub fn load_aliases(&self, registry: &mut Registry) {
        for (name, command) in &self.aliases {
            registry
                .aliases_mut()
                .insert(name.trim_start_matches('/'), command);
        }
    }
}
