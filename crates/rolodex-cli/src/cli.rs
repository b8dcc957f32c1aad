//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Rolodex - a small contact manager
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Rolodex contact manager", long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROLODEX_CONFIG")]
    pub config: Option<String>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the schema, optionally seed, and run the HTTP server
    Serve,
    /// Create the database schema
    InitDb,
    /// Insert the sample contacts
    Seed,
    /// Print every contact as "Last, First"
    List,
    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the config file path that would be used
    Path,
    /// Write a default config file
    Init {
        /// Where to write (defaults to the resolved config path)
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print one value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },
    /// Print the effective configuration as TOML
    Show,
}

impl Args {
    /// The command to run, `serve` if none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
