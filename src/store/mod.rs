//! Catalog storage subsystem.
//!
//! # Data Flow
//! ```text
//! Locator (per lookup)
//!     → CatalogStore::list_entries(dir)
//!     → fs.rs (mount directory on disk)  | memory.rs (in-process tree)
//!     → Vec<CatalogEntry> in listing order
//! ```
//!
//! # Design Decisions
//! - Read-only: the locator never writes to a store
//! - No caching: every lookup lists directories again
//! - Paths are catalog-relative, `/`-separated, `""` is the root

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::locator::error::Result;

/// Kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Leaf,
    /// Neither; never matched.
    Other,
}

/// One listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl CatalogEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Leaf,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == EntryKind::Leaf
    }
}

/// Hierarchical store holding the catalog.
pub trait CatalogStore: Send + Sync {
    /// List the entries of a catalog-relative directory.
    ///
    /// Must return the same order for the same store state.
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for &S {
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>> {
        (**self).list_entries(dir)
    }
}

impl<S: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<S> {
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>> {
        (**self).list_entries(dir)
    }
}

/// Join a catalog-relative directory and an entry name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
