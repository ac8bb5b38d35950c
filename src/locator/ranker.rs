//! Candidate ranking.

use crate::locator::CandidateMatch;

/// Order candidates by descending weight.
///
/// The sort is stable: equal weights keep traversal order. Callers should
/// not rely on any particular order among equal weights.
pub fn rank(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    candidates.sort_by(|a, b| b.weight.cmp(&a.weight));
    candidates
}
