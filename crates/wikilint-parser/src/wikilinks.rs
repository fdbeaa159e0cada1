//! Wikilink extraction
//!
//! Recognizes Obsidian-style references, one line at a time:
//! - Basic wikilinks: `[[note]]`
//! - Wikilinks with aliases: `[[note|alias]]`
//! - Wikilinks with headings: `[[note#heading]]`
//! - Embeds: `![[image.png]]`
//! - Complex: `[[note#heading|alias]]`
//!
//! A reference never spans lines. Occurrences on the same line are matched
//! left to right without overlap.

use super::frontmatter;
use super::traits::ReferenceExtractor;
use super::types::Reference;
use regex::Regex;
use std::sync::LazyLock;

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\]]+)\]\]").expect("wikilink regex"));

/// Extract every reference in `content`, in line order.
pub fn extract_references(content: &str) -> Vec<Reference> {
    let mut references = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        // Quick check before running the regex
        if !line.contains("[[") {
            continue;
        }

        for cap in WIKILINK_REGEX.captures_iter(line) {
            let (Some(full), Some(bang), Some(inner)) = (cap.get(0), cap.get(1), cap.get(2)) else {
                continue;
            };

            let is_embed = !bang.as_str().is_empty();
            if let Some(reference) = Reference::parse(full.as_str(), inner.as_str(), is_embed, index + 1)
            {
                references.push(reference);
            }
        }
    }

    references
}

/// Default [`ReferenceExtractor`]: wikilink grammar plus YAML frontmatter aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikilinkExtractor;

impl WikilinkExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for WikilinkExtractor {
    fn extract_references(&self, content: &str) -> Vec<Reference> {
        extract_references(content)
    }

    fn extract_aliases(&self, content: &str) -> Vec<String> {
        frontmatter::extract_aliases(content)
    }
}
