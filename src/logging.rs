//! Diagnostics for the irc-input binary.
//!
//! stdout carries protocol lines and buffer output, so tracing output goes to
//! stderr unless `--log-file` asks for the state-dir log file.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// When the log file cannot be created the binary keeps running and logs to
/// stderr instead.
pub fn init(log_file: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_file {
        match open_log_file() {
            Ok(file) => {
                builder.with_writer(file).with_ansi(false).init();
                return;
            }
            Err(e) => eprintln!("Warning: could not open {}: {e}", log_path().display()),
        }
    }
    builder.with_writer(std::io::stderr).init();
}

/// Creates (or truncates) the log file and its directory.
fn open_log_file() -> std::io::Result<File> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// `irc-input/irc-input.log` under the state dir, falling back to the config
/// dir and then the temp dir.
pub fn log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("irc-input").join("irc-input.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("irc-input.log"))
}
