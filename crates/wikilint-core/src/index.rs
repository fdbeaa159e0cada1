//! Vault index
//!
//! The resolution oracle for one run. Two lookups share one normalization:
//! - every file in the vault (documents, images, any asset) by base name
//! - every alias declared in a document's frontmatter
//!
//! An index is populated through [`VaultIndexBuilder`] and is immutable once
//! built, so it can be shared freely while references are resolved.

use crate::error::VaultResult;
use crate::fs::LocalVaultFs;
use crate::traits::{IndexBuilder, VaultFs};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use wikilint_parser::{ReferenceExtractor, WikilinkExtractor};

const DOCUMENT_SUFFIX: &str = ".md";

/// Normalize a file name, alias, or reference target for lookup.
///
/// Case-folds, then strips any trailing `.md`. Folding first makes the
/// function idempotent: `Note.MD`, `note.md` and `NOTE` all become `note`.
pub fn normalize_target(target: &str) -> String {
    let mut normalized = target.to_lowercase();
    while normalized.ends_with(DOCUMENT_SUFFIX) {
        let len = normalized.len() - DOCUMENT_SUFFIX.len();
        normalized.truncate(len);
    }
    normalized
}

/// Immutable name → location lookup for one vault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultIndex {
    /// normalized file name -> path
    files: HashMap<String, PathBuf>,
    /// normalized alias -> declaring document
    aliases: HashMap<String, PathBuf>,
}

impl VaultIndex {
    /// Start an empty builder
    pub fn builder() -> VaultIndexBuilder {
        VaultIndexBuilder::default()
    }

    /// True if `target` names an indexed file or a declared alias.
    pub fn resolve(&self, target: &str) -> bool {
        self.locate(target).is_some()
    }

    /// Where `target` points. File names are probed before aliases.
    pub fn locate(&self, target: &str) -> Option<&Path> {
        let normalized = normalize_target(target);
        self.files
            .get(&normalized)
            .or_else(|| self.aliases.get(&normalized))
            .map(PathBuf::as_path)
    }

    /// Number of distinct normalized file names
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of distinct normalized aliases
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

/// Accumulates entries for a [`VaultIndex`].
///
/// Later inserts win on a normalized collision; the overwrite is logged at
/// debug level and is never an error.
#[derive(Debug, Default)]
pub struct VaultIndexBuilder {
    files: HashMap<String, PathBuf>,
    aliases: HashMap<String, PathBuf>,
}

impl VaultIndexBuilder {
    /// Index a file under its normalized base name.
    pub fn insert_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        let Some(name) = path.file_name() else {
            return self;
        };
        let key = normalize_target(&name.to_string_lossy());

        if let Some(previous) = self.files.insert(key.clone(), path.clone()) {
            debug!(
                name = %key,
                previous = %previous.display(),
                current = %path.display(),
                "File name collision, keeping the later entry"
            );
        }
        self
    }

    /// Index an alias declared by the document at `path`.
    pub fn insert_alias(&mut self, alias: &str, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        let key = normalize_target(alias);

        if let Some(previous) = self.aliases.insert(key.clone(), path.clone()) {
            debug!(
                alias = %key,
                previous = %previous.display(),
                current = %path.display(),
                "Alias collision, keeping the later declaration"
            );
        }
        self
    }

    /// Freeze the collected entries.
    pub fn build(self) -> VaultIndex {
        VaultIndex {
            files: self.files,
            aliases: self.aliases,
        }
    }
}

/// [`IndexBuilder`] that walks the whole vault, then reads every document's
/// frontmatter for aliases. Files are always indexed before aliases.
#[derive(Clone)]
pub struct VaultIndexer {
    fs: Arc<dyn VaultFs>,
    extractor: Arc<dyn ReferenceExtractor>,
}

impl VaultIndexer {
    /// Indexer over the given filesystem view and extractor
    pub fn new(fs: Arc<dyn VaultFs>, extractor: Arc<dyn ReferenceExtractor>) -> Self {
        Self { fs, extractor }
    }
}

impl Default for VaultIndexer {
    fn default() -> Self {
        Self::new(Arc::new(LocalVaultFs::new()), Arc::new(WikilinkExtractor::new()))
    }
}

impl IndexBuilder for VaultIndexer {
    fn build(&self, root: &Path, documents: &[PathBuf]) -> VaultResult<VaultIndex> {
        let mut builder = VaultIndex::builder();

        for path in self.fs.walk_files(root)? {
            builder.insert_file(path);
        }

        for document in documents {
            let content = self.fs.read_document(document)?;
            for alias in self.extractor.extract_aliases(&content) {
                builder.insert_alias(&alias, document.as_path());
            }
        }

        let index = builder.build();
        info!(
            files = index.file_count(),
            aliases = index.alias_count(),
            "Built vault index"
        );
        Ok(index)
    }
}
