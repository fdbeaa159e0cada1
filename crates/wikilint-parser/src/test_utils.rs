//! Test utilities for extraction tests.
//!
//! Enable with the `test-utils` feature.
//!
//! ```rust,ignore
//! use wikilint_parser::test_utils::synthesize_occurrence;
//!
//! let text = synthesize_occurrence("Note", Some("Heading"), None, true);
//! assert_eq!(text, "![[Note#Heading]]");
//! ```

/// Write a reference occurrence back out in wikilink syntax.
pub fn synthesize_occurrence(
    target: &str,
    heading: Option<&str>,
    alias: Option<&str>,
    is_embed: bool,
) -> String {
    let mut occurrence = String::new();
    if is_embed {
        occurrence.push('!');
    }
    occurrence.push_str("[[");
    occurrence.push_str(target);
    if let Some(heading) = heading {
        occurrence.push('#');
        occurrence.push_str(heading);
    }
    if let Some(alias) = alias {
        occurrence.push('|');
        occurrence.push_str(alias);
    }
    occurrence.push_str("]]");
    occurrence
}

/// Build a document whose frontmatter declares `aliases` as a flow list.
pub fn document_with_aliases(aliases: &[&str], body: &str) -> String {
    format!("---\naliases: [{}]\n---\n{}", aliases.join(", "), body)
}
