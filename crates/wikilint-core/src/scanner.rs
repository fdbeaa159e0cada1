//! Document enumeration

use crate::error::VaultResult;
use crate::fs::LocalVaultFs;
use crate::traits::{Scanner, VaultFs};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// File extension that marks a vault document.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Returns true when `path` is a vault document (exact `.md` extension).
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == DOCUMENT_EXTENSION)
        .unwrap_or(false)
}

/// [`Scanner`] that keeps the markdown files from a full-tree walk.
#[derive(Clone)]
pub struct MarkdownScanner {
    fs: Arc<dyn VaultFs>,
}

impl MarkdownScanner {
    /// Scanner over the given filesystem view
    pub fn new(fs: Arc<dyn VaultFs>) -> Self {
        Self { fs }
    }
}

impl Default for MarkdownScanner {
    fn default() -> Self {
        Self::new(Arc::new(LocalVaultFs::new()))
    }
}

impl Scanner for MarkdownScanner {
    fn scan(&self, root: &Path) -> VaultResult<Vec<PathBuf>> {
        let documents: Vec<PathBuf> = self
            .fs
            .walk_files(root)?
            .into_iter()
            .filter(|path| is_document(path))
            .collect();

        debug!("Found {} documents in {}", documents.len(), root.display());
        Ok(documents)
    }
}
