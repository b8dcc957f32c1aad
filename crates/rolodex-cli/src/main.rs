//! Rolodex CLI
//!
//! Serves the contact manager and manages its database and configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use rolodex_cli::config_handlers::handle_config_command;
use rolodex_cli::{Args, Command, commands, logging};
use rolodex_core::RolodexConfig;
use rolodex_core::config::LoggingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.as_deref();
    let command = args.resolved_command();

    // Config commands must work even when the config file does not load.
    let config = match &command {
        Command::Config { action } => {
            logging::init(&LoggingConfig::default().level, args.verbose);
            handle_config_command(config_path, action.clone())?;
            return Ok(());
        }
        _ => RolodexConfig::load(config_path)?,
    };
    logging::init(&config.logging.level, args.verbose);
    tracing::debug!(?command, "Starting rolodex");

    match command {
        Command::Serve => commands::serve(config).await?,
        Command::InitDb => commands::init_db(&config).await?,
        Command::Seed => {
            commands::seed(&config).await?;
        }
        Command::List => {
            commands::list(&config).await?;
        }
        Command::Config { .. } => {}
    }

    Ok(())
}
