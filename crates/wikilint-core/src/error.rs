//! Vault error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a validation run.
///
/// Frontmatter problems never show up here; they are treated as "no aliases".
#[derive(Debug, Error)]
pub enum VaultError {
    /// Walking the vault tree failed (missing root, permissions, I/O mid-walk)
    #[error("walk vault failed at {}", root.display())]
    Walk {
        /// Vault root being walked
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A document could not be read
    #[error("read file failed: {}", path.display())]
    ReadDocument {
        /// Document that failed to load
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Document enumeration failed
    #[error("scan failed")]
    Scan(#[source] Box<VaultError>),

    /// Index construction failed
    #[error("build index failed")]
    BuildIndex(#[source] Box<VaultError>),
}

/// Specialized Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

impl VaultError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDocument {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error raised while enumerating documents
    pub fn scan(source: VaultError) -> Self {
        Self::Scan(Box::new(source))
    }

    /// Wrap an error raised while building the index
    pub fn build_index(source: VaultError) -> Self {
        Self::BuildIndex(Box::new(source))
    }

    /// The innermost vault error, skipping stage wrappers
    pub fn root_cause(&self) -> &VaultError {
        match self {
            Self::Scan(inner) | Self::BuildIndex(inner) => inner.root_cause(),
            other => other,
        }
    }
}
