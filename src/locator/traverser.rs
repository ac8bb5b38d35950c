//! Catalog descent.
//!
//! # Responsibilities
//! - Walk the catalog one request path segment per directory level
//! - Score directories in directory mode, leaves in leaf mode
//! - Prune zero-weight branches before descending
//!
//! # Design Decisions
//! - Explicit worklist instead of recursion, so deep catalogs cannot
//!   exhaust the call stack
//! - Children are pushed in reverse so candidates come out in depth-first
//!   listing order
//! - Entries of the wrong kind for their level are skipped silently

use crate::locator::decoder::decode;
use crate::locator::error::Result;
use crate::locator::matcher::{match_level, MatchState, Segment};
use crate::locator::request::Request;
use crate::locator::CandidateMatch;
use crate::store::{join, CatalogStore};

struct Frame {
    dir: String,
    level: usize,
    accumulated: MatchState,
}

/// Collect every leaf with positive weight for `request`, in traversal order.
pub fn find_all<S>(store: &S, request: &Request, out: &mut Vec<CandidateMatch>) -> Result<()>
where
    S: CatalogStore + ?Sized,
{
    let Some(last) = request.path_segments.len().checked_sub(1) else {
        return Ok(());
    };

    let mut stack = vec![Frame {
        dir: String::new(),
        level: 0,
        accumulated: MatchState::default(),
    }];

    while let Some(frame) = stack.pop() {
        let entries = store.list_entries(&frame.dir)?;
        let segment = request.path_segments[frame.level].as_str();

        if frame.level == last {
            let expected = Segment::Pattern(request.leaf_pattern(segment));
            for entry in entries.iter().filter(|e| e.is_leaf()) {
                let actual = Segment::Pattern(decode(&entry.name)?);
                let level = match_level(&actual, &expected, true);
                if level.is_match() {
                    let state = frame.accumulated.combine(level);
                    out.push(CandidateMatch::new(join(&frame.dir, &entry.name), state));
                }
            }
            continue;
        }

        let expected = Segment::from(segment);
        let mut children = Vec::new();
        for entry in entries.iter().filter(|e| e.is_directory()) {
            let level = match_level(&Segment::from(entry.name.as_str()), &expected, false);
            if level.is_match() {
                children.push(Frame {
                    dir: join(&frame.dir, &entry.name),
                    level: frame.level + 1,
                    accumulated: frame.accumulated.combine(level),
                });
            }
        }
        stack.extend(children.into_iter().rev());
    }

    Ok(())
}
