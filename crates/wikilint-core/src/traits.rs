//! Collaborator traits
//!
//! Each stage of the pipeline sits behind a small trait so the validator
//! can be assembled from deterministic test doubles:
//! - [`VaultFs`]: walking the tree and reading documents
//! - [`Scanner`]: choosing which files are documents
//! - [`IndexBuilder`]: turning the tree into a [`VaultIndex`]
//! - [`Resolver`]: deciding whether a reference exists
//!
//! Extraction lives in `wikilint_parser::ReferenceExtractor`.

use crate::error::VaultResult;
use crate::index::VaultIndex;
use std::path::{Path, PathBuf};
use wikilint_parser::Reference;

/// Read-only view of the vault on some storage.
pub trait VaultFs: Send + Sync {
    /// Every non-directory entry under `root`, in a stable order.
    fn walk_files(&self, root: &Path) -> VaultResult<Vec<PathBuf>>;

    /// Full text of one document.
    fn read_document(&self, path: &Path) -> VaultResult<String>;
}

/// Enumerates the documents to validate.
pub trait Scanner: Send + Sync {
    /// Document paths under `root`, recursively.
    fn scan(&self, root: &Path) -> VaultResult<Vec<PathBuf>>;
}

/// Builds the lookup structure for one run.
pub trait IndexBuilder: Send + Sync {
    /// Index every file under `root` plus the aliases declared in `documents`.
    fn build(&self, root: &Path, documents: &[PathBuf]) -> VaultResult<VaultIndex>;
}

/// Decides whether a reference points at something that exists.
pub trait Resolver: Send + Sync {
    /// True when the reference resolves. Must be free of side effects.
    fn resolve(&self, reference: &Reference, index: &VaultIndex) -> bool;
}
