//! Filesystem-backed catalog.
//!
//! # Responsibilities
//! - List a mount directory's children with their kind
//! - Read the bytes of a resolved leaf
//!
//! # Design Decisions
//! - Entry kind follows symlinks; a dangling link is an error
//! - Listings are sorted by name so repeated lookups agree

use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::error::{LocatorError, Result};
use crate::store::{CatalogEntry, CatalogStore, EntryKind};

/// A catalog rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FsStore {
    mount: PathBuf,
}

impl FsStore {
    pub fn new(mount: impl Into<PathBuf>) -> Self {
        Self {
            mount: mount.into(),
        }
    }

    pub fn mount(&self) -> &Path {
        &self.mount
    }

    /// Absolute location of a catalog-relative path.
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        let mut path = self.mount.clone();
        path.extend(relative.split('/').filter(|s| !s.is_empty()));
        path
    }

    /// Read a leaf's content.
    pub fn read_leaf(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(relative);
        fs::read(&path).map_err(|e| LocatorError::store(path, e))
    }
}

impl CatalogStore for FsStore {
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>> {
        let dir_path = self.resolve_path(dir);
        let read_dir = fs::read_dir(&dir_path).map_err(|e| LocatorError::store(&dir_path, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| LocatorError::store(&dir_path, e))?;
            let path = item.path();
            let name = item
                .file_name()
                .into_string()
                .map_err(|_| LocatorError::InvalidEntryName(path.clone()))?;
            let meta = fs::metadata(&path).map_err(|e| LocatorError::store(&path, e))?;
            let kind = if meta.is_dir() {
                EntryKind::Directory
            } else if meta.is_file() {
                EntryKind::Leaf
            } else {
                EntryKind::Other
            };
            entries.push(CatalogEntry { name, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
