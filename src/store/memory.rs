//! In-memory catalog.

use std::collections::HashMap;

use crate::locator::error::{LocatorError, Result};
use crate::store::{join, CatalogEntry, CatalogStore};

/// A catalog held in memory. Listing order is insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dirs: HashMap<String, Vec<CatalogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(String::new(), Vec::new());
        Self { dirs }
    }

    /// Build a store from `/`-separated leaf paths; parent directories are implied.
    pub fn from_leaves<I, S>(leaves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for leaf in leaves {
            store.add_leaf(leaf.as_ref());
        }
        store
    }

    /// Add a leaf, creating parent directories as needed.
    pub fn add_leaf(&mut self, path: &str) {
        let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(name) = parts.pop() else {
            return;
        };
        let dir = self.ensure_dir(&parts);
        self.push(&dir, CatalogEntry::leaf(name));
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&mut self, path: &str) {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.ensure_dir(&parts);
    }

    fn ensure_dir(&mut self, parts: &[&str]) -> String {
        let mut current = String::new();
        for part in parts {
            let child = join(&current, part);
            if !self.dirs.contains_key(&child) {
                self.push(&current, CatalogEntry::directory(*part));
                self.dirs.insert(child.clone(), Vec::new());
            }
            current = child;
        }
        current
    }

    fn push(&mut self, dir: &str, entry: CatalogEntry) {
        let entries = self.dirs.entry(dir.to_string()).or_default();
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryStore {
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            LocatorError::store(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            )
        })
    }
}
