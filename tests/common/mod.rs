//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Leaves of the standard fixture catalog.
pub const FIXTURE_LEAVES: &[&str] = &[
    "deal/26701138.GET.json",
    "method.POST.json",
    "qs?key1=value1.GET.json",
    "qs.POST.json",
    "wildcard/:str.GET.json",
    "params/:id/:value.json",
    "weight/:id.json",
    "weight/42.GET.json",
];

/// Build a catalog on disk containing `leaves`. Each leaf's content is its own path.
pub fn catalog(leaves: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for leaf in leaves {
        write_leaf(tmp.path(), leaf);
    }
    tmp
}

/// Catalog with [`FIXTURE_LEAVES`].
#[allow(dead_code)]
pub fn fixture_catalog() -> TempDir {
    catalog(FIXTURE_LEAVES)
}

fn write_leaf(root: &Path, leaf: &str) {
    let path = root.join(leaf);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, leaf.as_bytes()).unwrap();
}
