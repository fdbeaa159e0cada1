use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use wikilint_cli::{
    cli::{Cli, Commands},
    commands,
    config::{CliConfig, ConfigOverrides},
    logging,
};

/// Exit status when the run completes and finds broken references
const EXIT_DEFECTS: u8 = 1;
/// Exit status when the run itself fails
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration with CLI overrides
    let overrides = ConfigOverrides {
        vault: cli.vault.clone(),
        format: cli.format.clone(),
        log_level: cli.requested_log_level(),
    };
    let config = CliConfig::load(cli.config.clone(), overrides)?;

    // Initialize logging
    logging::init_logging(config.log_level());
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Some(Commands::Config(cmd)) => {
            commands::config::execute(&config, cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Check) | None => {
            let report = commands::check::execute(&config)?;
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_DEFECTS))
            }
        }
    }
}
