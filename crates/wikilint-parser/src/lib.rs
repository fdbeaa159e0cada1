//! Wikilint Reference Parser
//!
//! Turns the text of a vault document into structured data:
//! - Obsidian-style wikilinks and embeds: `[[note]]`, `![[image.png]]`
//! - Heading and display-alias fragments: `[[note#heading|shown text]]`
//! - Alternate names declared in a leading YAML frontmatter block
//!
//! Nothing in this crate touches the filesystem. Callers hand it document
//! text and get back plain values, which keeps the grammar testable in
//! isolation and lets the core crate substitute its own extractor.

pub mod frontmatter;
pub mod traits;
pub mod types;
pub mod wikilinks;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types for convenience
pub use frontmatter::{extract_aliases, extract_frontmatter, ALIASES_KEY, FRONTMATTER_DELIMITER};
pub use traits::ReferenceExtractor;
pub use types::Reference;
pub use wikilinks::{extract_references, WikilinkExtractor};
