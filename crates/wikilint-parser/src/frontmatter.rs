//! Frontmatter alias extraction
//!
//! A document may open with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! aliases: [AI, Artificial Intelligence]
//! ---
//! ```
//!
//! Only the `aliases` key is read. Broken frontmatter is not a link error,
//! so every failure here degrades to "no aliases".

use serde::Deserialize;
use serde_yaml::Value;

/// Marker line that opens and closes a frontmatter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Frontmatter key holding alternate names.
pub const ALIASES_KEY: &str = "aliases";

#[derive(Debug, Default, Deserialize)]
struct AliasBlock {
    #[serde(default)]
    aliases: Option<Value>,
}

/// Return the raw frontmatter body, if the document starts with one.
///
/// The document must begin with `---\n`; the body runs up to the next line
/// consisting solely of `---`. Without a closing delimiter there is no block.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---\n")?;
    let (body, _) = rest.split_once("\n---\n")?;
    Some(body)
}

/// Alternate names declared under `aliases`, as one string or a list.
///
/// Non-string list items are skipped. Any other shape, a missing key, a
/// missing block, or YAML that fails to parse all produce an empty list.
pub fn extract_aliases(content: &str) -> Vec<String> {
    let Some(body) = extract_frontmatter(content) else {
        return Vec::new();
    };
    if body.trim().is_empty() {
        return Vec::new();
    }

    let block: AliasBlock = match serde_yaml::from_str(body) {
        Ok(block) => block,
        Err(_) => return Vec::new(),
    };

    match block.aliases {
        Some(Value::String(alias)) => vec![alias],
        Some(Value::Sequence(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(alias) => Some(alias),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_frontmatter_body() {
        let content = "---\ntitle: Test\naliases: X\n---\n# Body\n";
        assert_eq!(extract_frontmatter(content), Some("title: Test\naliases: X"));
    }

    #[test]
    fn test_frontmatter_must_start_document() {
        let content = "\n---\naliases: X\n---\n";
        assert_eq!(extract_frontmatter(content), None);
        assert!(extract_aliases(content).is_empty());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\naliases: [A, B]\n# no closing delimiter\n";
        assert_eq!(extract_frontmatter(content), None);
        assert!(extract_aliases(content).is_empty());
    }

    #[test]
    fn test_single_string_alias() {
        let content = "---\naliases: MyAlias\n---\nBody";
        assert_eq!(extract_aliases(content), vec!["MyAlias".to_string()]);
    }

    #[test]
    fn test_flow_sequence_aliases() {
        let content = "---\naliases: [AI, Artificial Intelligence]\n---\n";
        assert_eq!(
            extract_aliases(content),
            vec!["AI".to_string(), "Artificial Intelligence".to_string()]
        );
    }

    #[test]
    fn test_block_sequence_aliases() {
        let content = "---\ntags: [x]\naliases:\n  - First\n  - Second\n---\ntext\n";
        assert_eq!(
            extract_aliases(content),
            vec!["First".to_string(), "Second".to_string()]
        );
    }

    #[test]
    fn test_non_string_items_are_skipped() {
        let content = "---\naliases: [Name, 42, true, {a: b}]\n---\n";
        assert_eq!(extract_aliases(content), vec!["Name".to_string()]);
    }

    #[test]
    fn test_unrecognized_shapes_yield_nothing() {
        for body in ["aliases: 42", "aliases:", "aliases: {a: b}", "title: No aliases"] {
            let content = format!("---\n{}\n---\n", body);
            assert!(extract_aliases(&content).is_empty(), "body: {}", body);
        }
    }

    #[test]
    fn test_malformed_yaml_is_silent() {
        let content = "---\ntitle: Test\ninvalid yaml: [unclosed\n---\n# Content\n";
        assert!(extract_aliases(content).is_empty());
    }

    #[test]
    fn test_non_mapping_block_is_silent() {
        let content = "---\n- just\n- a list\n---\n";
        assert!(extract_aliases(content).is_empty());
    }

    #[test]
    fn test_empty_block() {
        assert!(extract_aliases("---\n\n---\nBody").is_empty());
        assert!(extract_aliases("").is_empty());
    }
}
