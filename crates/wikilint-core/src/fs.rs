//! Local filesystem access for vaults

use crate::error::{VaultError, VaultResult};
use crate::traits::VaultFs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// [`VaultFs`] backed by the local disk.
///
/// Entries are yielded in lexical order within each directory, symlinks are
/// not followed, and the first walk error aborts the whole walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVaultFs;

impl LocalVaultFs {
    /// Create a new local filesystem view
    pub fn new() -> Self {
        Self
    }
}

impl VaultFs for LocalVaultFs {
    fn walk_files(&self, root: &Path) -> VaultResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|source| VaultError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }
            files.push(entry.into_path());
        }

        trace!("Walked {} files under {}", files.len(), root.display());
        Ok(files)
    }

    fn read_document(&self, path: &Path) -> VaultResult<String> {
        let bytes = std::fs::read(path).map_err(|source| VaultError::read(path, source))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_includes_assets_and_nested() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("sub/deeper")).unwrap();
        fs::write(tmp.path().join("b.md"), "").unwrap();
        fs::write(tmp.path().join("a.png"), [0u8, 1, 2]).unwrap();
        fs::write(tmp.path().join("sub/deeper/c.md"), "").unwrap();

        let files = LocalVaultFs::new().walk_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("b.md"),
                PathBuf::from("sub/deeper/c.md"),
            ]
        );
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let err = LocalVaultFs::new().walk_files(&missing).unwrap_err();
        assert!(matches!(err, VaultError::Walk { ref root, .. } if root == &missing));
    }

    #[test]
    fn test_read_document_is_lossy() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("odd.md");
        fs::write(&path, b"[[Note]] \xff trailing").unwrap();

        let content = LocalVaultFs::new().read_document(&path).unwrap();
        assert!(content.starts_with("[[Note]]"));
        assert!(content.ends_with("trailing"));
    }

    #[test]
    fn test_read_missing_document_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.md");

        let err = LocalVaultFs::new().read_document(&path).unwrap_err();
        assert!(matches!(err, VaultError::ReadDocument { path: ref p, .. } if p == &path));
    }
}
