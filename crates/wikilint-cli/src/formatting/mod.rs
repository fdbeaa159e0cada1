//! Report rendering
//!
//! Turns a [`ValidationResult`] into text for stdout:
//! - `text`: a human-readable listing, files sorted by path
//! - `json`: an object mapping each file to its broken links

use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::str::FromStr;
use wikilint_core::{Defect, ValidationResult};

/// Message printed for a clean vault.
pub const NO_BROKEN_LINKS: &str = "No broken links found.\n";

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("invalid format: {} (must be 'text' or 'json')", other)),
        }
    }
}

/// Renders a validation result
pub trait Formatter {
    fn format(&self, result: &ValidationResult) -> Result<String>;
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Human-readable listing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        if result.is_empty() {
            return Ok(NO_BROKEN_LINKS.to_string());
        }

        let mut output = String::from("Broken links found in vault:\n\n");
        for (file, defects) in sorted_by_path(result) {
            writeln!(output, "{}:", file)?;
            for defect in defects {
                writeln!(output, "  Line {}: {}", defect.line, defect.link)?;
            }
            output.push('\n');
        }

        Ok(output)
    }
}

/// Pretty-printed JSON object, keys sorted
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        let map = sorted_by_path(result);
        let mut output = serde_json::to_string_pretty(&map).context("marshal json failed")?;
        output.push('\n');
        Ok(output)
    }
}

fn sorted_by_path(result: &ValidationResult) -> BTreeMap<String, &[Defect]> {
    result
        .iter()
        .map(|(path, defects)| (path.display().to_string(), defects))
        .collect()
}
