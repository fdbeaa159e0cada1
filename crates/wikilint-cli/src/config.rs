use crate::cli::LogLevel;
use crate::formatting::OutputFormat;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Vault configuration
    #[serde(default)]
    pub vault: VaultConfig,
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Vault configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Path to the vault directory
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format: `text` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level when neither `--log-level` nor `--verbose` is given
    pub level: Option<LogLevel>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Values from the command line and environment; they beat the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vault: Option<PathBuf>,
    pub format: Option<String>,
    pub log_level: Option<LogLevel>,
}

impl CliConfig {
    /// Load configuration with precedence: defaults < file < env/args
    pub fn load(config_file: Option<PathBuf>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = Self::from_file_or_default(config_file)?;

        if let Some(path) = overrides.vault {
            config.vault.path = Some(path);
        }
        if let Some(format) = overrides.format {
            config.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = Some(level);
        }

        Ok(config)
    }

    /// The requested report format, rejecting unknown names
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }

    /// Effective log level (defaults to off)
    pub fn log_level(&self) -> LogLevel {
        self.logging.level.unwrap_or(LogLevel::Off)
    }

    /// Vault path with `~` expanded, made absolute against the working directory
    pub fn vault_path(&self) -> Result<PathBuf> {
        let Some(raw) = &self.vault.path else {
            bail!("no vault path configured (use --vault, the VAULT env var, or [vault].path in the config file)");
        };

        let expanded = expand_tilde(&raw.to_string_lossy());
        if expanded.is_absolute() {
            return Ok(expanded);
        }
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        Ok(cwd.join(expanded))
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("wikilint");
        Ok(config_dir.join("config.toml"))
    }

    /// Create a new config file with example values
    pub fn create_example(path: &Path) -> Result<()> {
        let example = r#"# Wikilint Configuration
# Location: ~/.config/wikilint/config.toml

[vault]
# Path to your vault
# Can also be set with --vault or the VAULT env var
# path = "/home/user/Documents/my-vault"

[output]
# Report format: "text" or "json"
# Can also be set with --format or the FORMAT env var
format = "text"

[logging]
# Log level: off, error, warn, info, debug, trace
# Logs go to stderr; RUST_LOG overrides this setting
level = "off"
"#;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path, example).context("Failed to write config file")?;

        Ok(())
    }

    /// Load config from file or return default
    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self> {
        // Skip the user's config file entirely in test mode
        if std::env::var("WIKILINT_TEST_MODE").is_ok() && config_file.is_none() {
            return Ok(Self::default());
        }

        let path = config_file
            .or_else(|| Self::default_config_path().ok())
            .filter(|p| p.exists());

        if let Some(path) = path {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Display the current configuration as TOML
    pub fn display_as_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }
}

/// Expand tilde in a path string to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/") || path == "~" {
        if let Some(home) = dirs::home_dir() {
            if path == "~" {
                return home;
            }
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}
