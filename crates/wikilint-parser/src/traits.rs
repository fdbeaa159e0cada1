//! Extraction abstraction
//!
//! The core crate depends on this trait rather than on the concrete
//! grammar, so tests can inject deterministic extractors.

use crate::types::Reference;

/// Pulls references and declared aliases out of document text.
pub trait ReferenceExtractor: Send + Sync {
    /// All references in `content`, in the order they appear.
    fn extract_references(&self, content: &str) -> Vec<Reference>;

    /// Alternate names declared in the document's frontmatter.
    ///
    /// Never fails: malformed or missing frontmatter yields an empty list.
    fn extract_aliases(&self, content: &str) -> Vec<String>;
}
