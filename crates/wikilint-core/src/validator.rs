//! Vault validation
//!
//! Runs the whole pipeline for one vault:
//! 1. enumerate documents ([`Scanner`])
//! 2. build the index over the full tree ([`IndexBuilder`])
//! 3. extract each document's references in line order
//! 4. keep every reference the [`Resolver`] rejects
//!
//! Any failure aborts the run; a partial result is never returned.

use crate::error::{VaultError, VaultResult};
use crate::fs::LocalVaultFs;
use crate::index::{VaultIndex, VaultIndexer};
use crate::resolver::TargetResolver;
use crate::scanner::MarkdownScanner;
use crate::traits::{IndexBuilder, Resolver, Scanner, VaultFs};
use crate::types::{Defect, ValidationResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, trace};
use wikilint_parser::{ReferenceExtractor, WikilinkExtractor};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Checks every reference in a vault.
///
/// Build one with [`Validator::builder`]; collaborators left unset fall back
/// to the local filesystem implementations.
#[derive(Clone)]
pub struct Validator {
    fs: Arc<dyn VaultFs>,
    scanner: Arc<dyn Scanner>,
    extractor: Arc<dyn ReferenceExtractor>,
    indexer: Arc<dyn IndexBuilder>,
    resolver: Arc<dyn Resolver>,
}

impl Validator {
    /// Start configuring a validator
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Validator over the local disk with the default grammar and policy
    pub fn local() -> Self {
        Self::builder().build()
    }

    /// Validate the vault rooted at `root`.
    pub fn validate(&self, root: &Path) -> VaultResult<ValidationResult> {
        let documents = self.scanner.scan(root).map_err(VaultError::scan)?;
        let index = self
            .indexer
            .build(root, &documents)
            .map_err(VaultError::build_index)?;

        let checked = self.check_documents(&documents, &index)?;
        let result: ValidationResult = checked.into_iter().collect();

        info!(
            documents = documents.len(),
            files_with_defects = result.file_count(),
            defects = result.defect_count(),
            "Validated vault {}",
            root.display()
        );
        Ok(result)
    }

    #[cfg(not(feature = "parallel"))]
    fn check_documents(
        &self,
        documents: &[PathBuf],
        index: &VaultIndex,
    ) -> VaultResult<Vec<(PathBuf, Vec<Defect>)>> {
        documents
            .iter()
            .map(|path| {
                self.check_document(path, index)
                    .map(|defects| (path.clone(), defects))
            })
            .collect()
    }

    // Indexed collect keeps enumeration order, so output matches the sequential path
    #[cfg(feature = "parallel")]
    fn check_documents(
        &self,
        documents: &[PathBuf],
        index: &VaultIndex,
    ) -> VaultResult<Vec<(PathBuf, Vec<Defect>)>> {
        documents
            .par_iter()
            .map(|path| {
                self.check_document(path, index)
                    .map(|defects| (path.clone(), defects))
            })
            .collect()
    }

    fn check_document(&self, path: &Path, index: &VaultIndex) -> VaultResult<Vec<Defect>> {
        let content = self.fs.read_document(path)?;

        let defects: Vec<Defect> = self
            .extractor
            .extract_references(&content)
            .iter()
            .filter(|reference| !self.resolver.resolve(reference, index))
            .inspect(|reference| {
                trace!(
                    file = %path.display(),
                    line = reference.line,
                    target = %reference.target,
                    "Unresolved reference"
                )
            })
            .map(Defect::from)
            .collect();

        if !defects.is_empty() {
            debug!("{}: {} broken reference(s)", path.display(), defects.len());
        }
        Ok(defects)
    }
}

/// Builder for [`Validator`]
#[derive(Default)]
pub struct ValidatorBuilder {
    fs: Option<Arc<dyn VaultFs>>,
    scanner: Option<Arc<dyn Scanner>>,
    extractor: Option<Arc<dyn ReferenceExtractor>>,
    indexer: Option<Arc<dyn IndexBuilder>>,
    resolver: Option<Arc<dyn Resolver>>,
}

impl ValidatorBuilder {
    /// Filesystem view used for document reads (and by default collaborators)
    pub fn with_fs(mut self, fs: Arc<dyn VaultFs>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Document enumerator
    pub fn with_scanner(mut self, scanner: Arc<dyn Scanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Reference and alias extractor
    pub fn with_extractor(mut self, extractor: Arc<dyn ReferenceExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Index builder
    pub fn with_indexer(mut self, indexer: Arc<dyn IndexBuilder>) -> Self {
        self.indexer = Some(indexer);
        self
    }

    /// Resolution policy
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Assemble the validator, defaulting anything left unset
    pub fn build(self) -> Validator {
        let fs = self
            .fs
            .unwrap_or_else(|| Arc::new(LocalVaultFs::new()) as Arc<dyn VaultFs>);
        let extractor = self
            .extractor
            .unwrap_or_else(|| Arc::new(WikilinkExtractor::new()) as Arc<dyn ReferenceExtractor>);
        let scanner = self
            .scanner
            .unwrap_or_else(|| Arc::new(MarkdownScanner::new(fs.clone())) as Arc<dyn Scanner>);
        let indexer = self.indexer.unwrap_or_else(|| {
            Arc::new(VaultIndexer::new(fs.clone(), extractor.clone())) as Arc<dyn IndexBuilder>
        });
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(TargetResolver::new()) as Arc<dyn Resolver>);

        Validator {
            fs,
            scanner,
            extractor,
            indexer,
            resolver,
        }
    }
}
