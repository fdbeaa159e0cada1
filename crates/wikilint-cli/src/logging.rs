//! Logging setup
//!
//! Logs go to stderr so that stdout carries only the report.

use crate::cli::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: [&str; 4] = ["wikilint", "wikilint_cli", "wikilint_core", "wikilint_parser"];

/// Filter directives for `level`, scoped to this workspace's crates.
pub fn filter_directives(level: LogLevel) -> String {
    let level = LevelFilter::from(level).to_string().to_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    // A subscriber may already be installed (e.g. in tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(
            filter_directives(LogLevel::Debug),
            "wikilint=debug,wikilint_cli=debug,wikilint_core=debug,wikilint_parser=debug"
        );
        assert_eq!(
            filter_directives(LogLevel::Off),
            "wikilint=off,wikilint_cli=off,wikilint_core=off,wikilint_parser=off"
        );
    }
}
