//! Parsed reference types

use serde::{Deserialize, Serialize};

/// One occurrence of a wikilink or embed inside a document.
///
/// Examples of the raw forms this covers:
/// - `[[Note]]`
/// - `[[Note#Heading]]`
/// - `[[Note|Shown text]]`
/// - `![[diagram.png]]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// The matched source text, exactly as written (including a leading `!`).
    pub raw: String,
    /// Name being referenced, trimmed. Never empty.
    pub target: String,
    /// Heading fragment after `#`. Recorded for reporting only.
    pub heading: Option<String>,
    /// Display text after `|`. Recorded for reporting only.
    pub alias: Option<String>,
    /// True for `![[...]]` embeds.
    pub is_embed: bool,
    /// 1-based line number within the source document.
    pub line: usize,
}

impl Reference {
    /// Build a reference from a matched occurrence.
    ///
    /// `inner` is the text between `[[` and `]]`. It is split on the first `|`
    /// (display alias) and then on the first `#` (heading). Returns `None` when
    /// the target is empty after trimming, e.g. `[[#Heading]]`.
    pub fn parse(raw: &str, inner: &str, is_embed: bool, line: usize) -> Option<Self> {
        let (target_part, alias) = match inner.split_once('|') {
            Some((left, right)) => (left, non_empty(right.to_string())),
            None => (inner, None),
        };

        let (target, heading) = match target_part.split_once('#') {
            Some((left, right)) => (left.trim(), non_empty(right.trim().to_string())),
            None => (target_part.trim(), None),
        };

        if target.is_empty() {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            target: target.to_string(),
            heading,
            alias,
            is_embed,
            line,
        })
    }

    /// Text shown to users when this reference is reported.
    pub fn display_text(&self) -> &str {
        &self.raw
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_target() {
        let reference = Reference::parse("[[Note]]", "Note", false, 3).unwrap();
        assert_eq!(reference.target, "Note");
        assert_eq!(reference.heading, None);
        assert_eq!(reference.alias, None);
        assert!(!reference.is_embed);
        assert_eq!(reference.line, 3);
    }

    #[test]
    fn test_parse_heading_and_alias() {
        let raw = "[[ Note # Section |Shown]]";
        let reference = Reference::parse(raw, " Note # Section |Shown", false, 1).unwrap();
        assert_eq!(reference.target, "Note");
        assert_eq!(reference.heading.as_deref(), Some("Section"));
        // Alias text is kept verbatim
        assert_eq!(reference.alias.as_deref(), Some("Shown"));
        assert_eq!(reference.display_text(), raw);
    }

    #[test]
    fn test_alias_split_happens_before_heading_split() {
        let reference = Reference::parse("[[A|b#c]]", "A|b#c", false, 1).unwrap();
        assert_eq!(reference.target, "A");
        assert_eq!(reference.heading, None);
        assert_eq!(reference.alias.as_deref(), Some("b#c"));
    }

    #[test]
    fn test_empty_fragments_become_none() {
        let reference = Reference::parse("[[Note#|]]", "Note#|", false, 1).unwrap();
        assert_eq!(reference.heading, None);
        assert_eq!(reference.alias, None);
    }

    #[test]
    fn test_empty_target_is_rejected() {
        assert!(Reference::parse("[[#Heading]]", "#Heading", false, 1).is_none());
        assert!(Reference::parse("[[  |shown]]", "  |shown", false, 1).is_none());
    }
}
