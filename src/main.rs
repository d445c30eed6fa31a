//! irc-input - runs IRC client input lines through the command pipeline.

use std::io::BufRead;

use irc_input::cli::Cli;
use irc_input::commands::user_input;
use irc_input::config::Config;
use irc_input::console::{ConsoleFrontend, ConsoleTransport};
use irc_input::error::{ClientError, Result};
use irc_input::logging;
use irc_input::session::{ExecutionContext, InputSettings, Session};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    logging::init(cli.log_file);

    if let Err(e) = run(cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.parse_output_format().map_err(ClientError::config)?;

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    // CLI arguments take precedence over the config file.
    let mut identity = config.identity.clone();
    identity.merge(&cli.identity());

    let mut settings = InputSettings::from(config.irc);
    if cli.send_unknown {
        settings.send_unknown_commands = true;
    }

    let mut session = Session::new(
        Some(identity.server_info()),
        identity.buffer_info(),
        Box::new(ConsoleTransport::new(format)),
        Box::new(ConsoleFrontend::new(format)),
    )
    .with_settings(settings);
    config.load_aliases(&mut session.registry);
    info!(
        server = session.server_name(),
        buffer = %session.buffer.name,
        aliases = session.registry.aliases().len(),
        "session ready"
    );

    if !cli.exec.is_empty() {
        for line in &cli.exec {
            user_input(&mut ExecutionContext::new(&mut session), line);
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        user_input(&mut ExecutionContext::new(&mut session), &line);
    }
    Ok(())
}
