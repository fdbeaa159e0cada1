use crate::config::CliConfig;
use crate::formatting::formatter_for;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;
use wikilint_core::Validator;

/// Outcome of a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Rendered report in the requested format
    pub rendered: String,
    /// Number of unresolved references found
    pub defect_count: usize,
}

impl CheckReport {
    /// True when no reference was broken
    pub fn is_clean(&self) -> bool {
        self.defect_count == 0
    }
}

/// Validate the configured vault and render the report.
///
/// The output format is checked before any scanning starts.
pub fn run(config: &CliConfig, validator: &Validator) -> Result<CheckReport> {
    let format = config.output_format()?;
    let vault = config.vault_path()?;
    debug!("Checking vault {} ({:?} output)", vault.display(), format);

    let result = validator
        .validate(&vault)
        .with_context(|| format!("Failed to validate vault: {}", vault.display()))?;

    let rendered = formatter_for(format).format(&result)?;
    Ok(CheckReport {
        rendered,
        defect_count: result.defect_count(),
    })
}

/// Run the check against the local vault and print the report to stdout.
pub fn execute(config: &CliConfig) -> Result<CheckReport> {
    let report = run(config, &Validator::local())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.rendered.as_bytes())?;
    stdout.flush()?;

    Ok(report)
}
