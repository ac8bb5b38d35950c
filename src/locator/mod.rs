//! Catalog resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Request (path segments, query, method)
//!     → traverser.rs (descend catalog, one segment per level)
//!         → matcher.rs (score directory level / leaf level)
//!         → decoder.rs (leaf name → Pattern)
//!     → Vec<CandidateMatch>
//!     → ranker.rs (weight descending)    [single best only]
//!     → Option<CandidateMatch>
//! ```
//!
//! # Design Decisions
//! - The store is the route table; it is read again on every lookup
//! - Zero weight means "no match" and is pruned, never descended
//! - Absence of a match is `Ok(None)`, not an error
//! - A malformed leaf or store failure aborts the lookup

pub mod decoder;
pub mod error;
pub mod matcher;
pub mod ranker;
pub mod request;
pub mod traverser;

pub use decoder::{decode, Pattern};
pub use error::LocatorError;
pub use matcher::{match_level, MatchState, Segment};
pub use ranker::rank;
pub use request::Request;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::observability::metrics;
use crate::store::CatalogStore;

/// A resolved leaf with its score and bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    /// Catalog-relative path of the leaf, `/`-separated.
    pub path: String,
    pub weight: u32,
    pub params: BTreeMap<String, String>,
}

impl CandidateMatch {
    pub fn new(path: String, state: MatchState) -> Self {
        Self {
            path,
            weight: state.weight,
            params: state.params,
        }
    }
}

/// Resolves requests against a catalog store.
#[derive(Debug, Clone)]
pub struct Locator<S> {
    store: S,
}

impl<S: CatalogStore> Locator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The best-weighted match, or `None` when nothing matches.
    pub fn find(&self, request: &Request) -> error::Result<Option<CandidateMatch>> {
        let candidates = self.collect(request)?;
        Ok(rank(candidates).into_iter().next())
    }

    /// Every match with positive weight, in traversal order.
    pub fn find_all(&self, request: &Request) -> error::Result<Vec<CandidateMatch>> {
        self.collect(request)
    }

    fn collect(&self, request: &Request) -> error::Result<Vec<CandidateMatch>> {
        let start = Instant::now();
        let mut candidates = Vec::new();

        let result = traverser::find_all(&self.store, request, &mut candidates);
        metrics::record_lookup(&result, candidates.len(), start);

        match result {
            Ok(()) => {
                tracing::debug!(
                    method = %request.method,
                    segments = ?request.path_segments,
                    candidates = candidates.len(),
                    "Catalog lookup complete"
                );
                Ok(candidates)
            }
            Err(e) => {
                tracing::error!(
                    method = %request.method,
                    segments = ?request.path_segments,
                    error = %e,
                    "Catalog lookup failed"
                );
                Err(e)
            }
        }
    }
}
