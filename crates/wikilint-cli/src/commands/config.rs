use crate::cli::ConfigCommands;
use crate::config::CliConfig;
use anyhow::Result;

pub fn execute(config: &CliConfig, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path, force } => init(path, force),
        ConfigCommands::Show => show(config),
    }
}

fn init(path: Option<std::path::PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => CliConfig::default_config_path()?,
    };

    if path.exists() && !force {
        println!("Config file already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    CliConfig::create_example(&path)?;
    println!("Created config file at {}", path.display());
    Ok(())
}

fn show(config: &CliConfig) -> Result<()> {
    print!("{}", config.display_as_toml()?);
    Ok(())
}
