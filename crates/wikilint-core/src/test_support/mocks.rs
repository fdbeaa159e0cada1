//! Mock Implementations for Testing
//!
//! - **Deterministic**: paths come back in sorted order
//! - **Fast**: no disk access at all
//! - **Observable**: walk and read calls are counted
//! - **Error injection**: individual documents can be made unreadable
//!
//! ```rust,ignore
//! use wikilint_core::test_support::mocks::MockVaultFs;
//! use wikilint_core::traits::VaultFs;
//! use std::path::Path;
//!
//! let fs = MockVaultFs::new().with_file("/vault/Note.md", "[[Other]]");
//! let content = fs.read_document(Path::new("/vault/Note.md")).unwrap();
//! assert_eq!(content, "[[Other]]");
//! assert_eq!(fs.stats().read_count, 1);
//! ```

use crate::error::{VaultError, VaultResult};
use crate::index::VaultIndex;
use crate::traits::{Resolver, VaultFs};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use wikilint_parser::Reference;

/// Call counters for [`MockVaultFs`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockVaultFsStats {
    pub walk_count: usize,
    pub read_count: usize,
}

#[derive(Debug, Default)]
struct MockVaultFsState {
    files: BTreeMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    missing_roots: HashSet<PathBuf>,
    stats: MockVaultFsStats,
}

/// In-memory vault. Clones share state, so a test can keep a handle for
/// assertions after passing one into a validator.
#[derive(Debug, Clone, Default)]
pub struct MockVaultFs {
    state: Arc<Mutex<MockVaultFsState>>,
}

impl MockVaultFs {
    /// Empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.into(), content.into());
        self
    }

    /// Make reads of `path` fail with `PermissionDenied`
    pub fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().unreadable.insert(path.into());
        self
    }

    /// Make walking `root` fail as if it did not exist
    pub fn with_missing_root(self, root: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().missing_roots.insert(root.into());
        self
    }

    /// Snapshot of the call counters
    pub fn stats(&self) -> MockVaultFsStats {
        self.state.lock().unwrap().stats
    }
}

impl VaultFs for MockVaultFs {
    fn walk_files(&self, root: &Path) -> VaultResult<Vec<PathBuf>> {
        let mut state = self.state.lock().unwrap();
        state.stats.walk_count += 1;

        if state.missing_roots.contains(root) {
            // walkdir errors cannot be constructed directly; surface the same
            // shape a failed read would produce for the root itself
            return Err(VaultError::read(
                root,
                io::Error::new(io::ErrorKind::NotFound, "vault root not found"),
            ));
        }

        Ok(state
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .cloned()
            .collect())
    }

    fn read_document(&self, path: &Path) -> VaultResult<String> {
        let mut state = self.state.lock().unwrap();
        state.stats.read_count += 1;

        if state.unreadable.contains(path) {
            return Err(VaultError::read(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }

        state.files.get(path).cloned().ok_or_else(|| {
            VaultError::read(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })
    }
}

/// [`Resolver`] that answers from a fixed set of target names.
///
/// Targets are compared exactly; the index is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    known: HashSet<String>,
}

impl StaticResolver {
    /// Resolver that accepts exactly `targets`
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: targets.into_iter().map(Into::into).collect(),
        }
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self, reference: &Reference, _index: &VaultIndex) -> bool {
        self.known.contains(&reference.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_filters_by_root() {
        let fs = MockVaultFs::new()
            .with_file("/vault/b.md", "")
            .with_file("/vault/a.png", "")
            .with_file("/elsewhere/c.md", "");

        let files = fs.walk_files(Path::new("/vault")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("/vault/a.png"), PathBuf::from("/vault/b.md")]
        );
        assert_eq!(fs.stats().walk_count, 1);
    }

    #[test]
    fn test_unreadable_document() {
        let fs = MockVaultFs::new()
            .with_file("/vault/a.md", "text")
            .with_unreadable("/vault/a.md");

        assert!(fs.read_document(Path::new("/vault/a.md")).is_err());
        assert_eq!(fs.stats().read_count, 1);
    }
}
