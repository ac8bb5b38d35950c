//! Error types for catalog resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a lookup.
///
/// "No matching leaf" is not an error; `Locator::find` returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// A leaf name without an extension segment. The catalog is inconsistent.
    #[error("Malformed leaf name (missing extension): {0}")]
    MalformedLeafName(String),

    /// The store could not list or probe an entry.
    #[error("Store error at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry name that is not valid UTF-8.
    #[error("Entry name is not valid UTF-8: {0:?}")]
    InvalidEntryName(PathBuf),
}

impl LocatorError {
    /// Wrap an I/O error raised while touching `path`.
    pub fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Store {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
