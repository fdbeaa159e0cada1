//! Wikilint Core
//!
//! Finds dangling wikilinks in a vault of markdown documents. The pipeline:
//! - [`scanner`]: enumerate the documents to check
//! - [`index`]: map every file name and declared alias to its location
//! - [`resolver`]: decide whether one reference exists
//! - [`validator`]: run extraction and resolution over every document and
//!   group the failures by file
//!
//! Every stage is behind a trait in [`traits`], so the pipeline can be
//! assembled from in-memory doubles (see `test_support`, feature `test-utils`).

pub mod error;
pub mod fs;
pub mod index;
pub mod resolver;
pub mod scanner;
pub mod traits;
pub mod types;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use error::{VaultError, VaultResult};
pub use fs::LocalVaultFs;
pub use index::{normalize_target, VaultIndex, VaultIndexBuilder, VaultIndexer};
pub use resolver::{resolve, TargetResolver};
pub use scanner::{is_document, MarkdownScanner, DOCUMENT_EXTENSION};
pub use traits::{IndexBuilder, Resolver, Scanner, VaultFs};
pub use types::{Defect, ValidationResult};
pub use validator::{Validator, ValidatorBuilder};

// Parser types used throughout the public API
pub use wikilint_parser::{Reference, ReferenceExtractor, WikilinkExtractor};
