//! Validation result types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wikilint_parser::Reference;

/// An unresolved reference, in its reported shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    /// The reference as written, e.g. `![[missing.png]]`
    pub link: String,
    /// 1-based line number in the source document
    pub line: usize,
}

impl From<&Reference> for Defect {
    fn from(reference: &Reference) -> Self {
        Self {
            link: reference.display_text().to_string(),
            line: reference.line,
        }
    }
}

/// Defects grouped by source document.
///
/// Documents appear in enumeration order and each defect list is in line
/// order. A document without defects has no entry; an empty result means
/// the vault is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    entries: Vec<(PathBuf, Vec<Defect>)>,
}

impl ValidationResult {
    /// Empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the defects for one document. Empty lists are not stored.
    ///
    /// Inserting a document twice appends to its existing list.
    pub fn insert(&mut self, path: impl Into<PathBuf>, defects: Vec<Defect>) {
        if defects.is_empty() {
            return;
        }
        let path = path.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, existing)) => existing.extend(defects),
            None => self.entries.push((path, defects)),
        }
    }

    /// True when no document has defects
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of documents with at least one defect
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of defects across all documents
    pub fn defect_count(&self) -> usize {
        self.entries.iter().map(|(_, defects)| defects.len()).sum()
    }

    /// Defects for one document, if it has any
    pub fn get(&self, path: &Path) -> Option<&[Defect]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|(_, defects)| defects.as_slice())
    }

    /// Documents and their defects, in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Defect])> {
        self.entries
            .iter()
            .map(|(path, defects)| (path.as_path(), defects.as_slice()))
    }
}

impl<P: Into<PathBuf>> FromIterator<(P, Vec<Defect>)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (P, Vec<Defect>)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (path, defects) in iter {
            result.insert(path, defects);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect(link: &str, line: usize) -> Defect {
        Defect {
            link: link.to_string(),
            line,
        }
    }

    #[test]
    fn test_empty_lists_are_dropped() {
        let mut result = ValidationResult::new();
        result.insert("/vault/clean.md", Vec::new());
        assert!(result.is_empty());
        assert!(result.get(Path::new("/vault/clean.md")).is_none());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let result: ValidationResult = vec![
            ("/vault/z.md", vec![defect("[[A]]", 1)]),
            ("/vault/a.md", vec![defect("[[B]]", 4), defect("[[C]]", 2)]),
        ]
        .into_iter()
        .collect();

        let paths: Vec<_> = result.iter().map(|(p, _)| p.to_path_buf()).collect();
        assert_eq!(paths, vec![PathBuf::from("/vault/z.md"), PathBuf::from("/vault/a.md")]);
        assert_eq!(result.file_count(), 2);
        assert_eq!(result.defect_count(), 3);

        let lines: Vec<_> = result
            .get(Path::new("/vault/a.md"))
            .unwrap()
            .iter()
            .map(|d| d.line)
            .collect();
        assert_eq!(lines, vec![4, 2]);
    }

    #[test]
    fn test_defect_from_reference_uses_raw_text() {
        let reference = Reference {
            raw: "![[missing.png|shown]]".to_string(),
            target: "missing.png".to_string(),
            heading: None,
            alias: Some("shown".to_string()),
            is_embed: true,
            line: 7,
        };
        assert_eq!(Defect::from(&reference), defect("![[missing.png|shown]]", 7));
    }

    #[test]
    fn test_defect_serialized_shape() {
        let json = serde_json::to_string(&defect("[[Dead]]", 5)).unwrap();
        assert_eq!(json, r#"{"link":"[[Dead]]","line":5}"#);
    }
}
