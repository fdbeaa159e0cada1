use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (run summaries)
    Info,
    /// Debug messages (per-file counts, name collisions)
    Debug,
    /// Trace-level messages (every unresolved reference)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wikilint")]
#[command(about = "wikilint - find broken wikilinks and embeds in an Obsidian-style vault")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to check if not provided)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Vault directory path
    #[arg(long, global = true, env = "VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format (text|json)
    /// If not specified, uses config file value or defaults to 'text'
    #[arg(short = 'f', long, global = true, env = "FORMAT")]
    pub format: Option<String>,

    /// Config file path (defaults to ~/.config/wikilint/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'off'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Log level requested on the command line, if any
    pub fn requested_log_level(&self) -> Option<LogLevel> {
        self.log_level
            .or(if self.verbose { Some(LogLevel::Debug) } else { None })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every wikilink and embed in the vault
    Check,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write an example config file
    Init {
        /// Where to write it (defaults to ~/.config/wikilint/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
